//! Local stand-in for the token-count API.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

/// Serves one canned response per connection, in order
pub struct TokenServer {
    pub url: String,
    requests: mpsc::Receiver<String>,
    handle: JoinHandle<()>,
}

impl TokenServer {
    /// `responses` are `(status line, JSON body)` pairs
    pub fn start(responses: Vec<(&'static str, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        let url = format!(
            "http://{}/v1/tokenizers/estimate-token-count",
            listener.local_addr().unwrap()
        );
        let (tx, requests) = mpsc::channel();

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut request = String::new();
                let mut content_length = 0usize;
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap_or(0) == 0 {
                        break;
                    }
                    if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                        content_length = v.trim().parse().unwrap_or(0);
                    }
                    let done = line == "\r\n";
                    request.push_str(&line);
                    if done {
                        break;
                    }
                }
                let mut request_body = vec![0u8; content_length];
                let _ = reader.read_exact(&mut request_body);
                request.push_str(&String::from_utf8_lossy(&request_body));
                let _ = tx.send(request);

                let mut stream = stream;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self {
            url,
            requests,
            handle,
        }
    }

    /// Server answering every request with the given counts
    pub fn counts(counts: &[u64]) -> Self {
        Self::start(
            counts
                .iter()
                .map(|n| ("200 OK", format!(r#"{{"data":{{"total_tokens":{}}}}}"#, n)))
                .collect(),
        )
    }

    /// Raw requests received so far
    pub fn received(&self) -> Vec<String> {
        self.requests.try_iter().collect()
    }

    /// Wait for the serving thread after all responses were sent
    pub fn join(self) -> Vec<String> {
        let _ = self.handle.join();
        self.requests.try_iter().collect()
    }
}

//! Pipeline Use Case
//!
//! Sequences the stages and applies the write-skip check before every
//! write. Clear and combine are best-effort per item, but any failed item
//! fails its stage and later stages never start. Tokenize is
//! all-or-nothing: the ledger is only saved after every file was counted.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::entities::{LedgerEntry, StageOutput, LEDGER_TIME_FORMAT};
use crate::domain::ports::{
    FileSystem, FsError, FsResult, LedgerRepository, PipelineEvent, PipelineEventSink, Tokenizer,
};
use crate::domain::services::{needs_write, Bundler, CommentStripper, PathClassifier};
use crate::domain::value_objects::{SafePath, Stage};
use crate::error::DocbundleError;

use super::options::PipelineOptions;
use super::result::PipelineResult;

/// Pipeline use case - orchestrates one run
///
/// Parameterized by its ports so tests can swap in an in-memory file
/// system and a scripted tokenizer. The tokenizer is optional; a run that
/// asks for tokenization without one fails the tokenize stage.
pub struct PipelineUseCase<FS, TK, LR>
where
    FS: FileSystem,
    TK: Tokenizer,
    LR: LedgerRepository,
{
    file_system: FS,
    tokenizer: Option<TK>,
    ledger_repo: LR,
}

impl<FS, TK, LR> PipelineUseCase<FS, TK, LR>
where
    FS: FileSystem,
    TK: Tokenizer,
    LR: LedgerRepository,
{
    pub fn new(file_system: FS, tokenizer: Option<TK>, ledger_repo: LR) -> Self {
        Self {
            file_system,
            tokenizer,
            ledger_repo,
        }
    }

    /// Execute the requested stages
    pub fn execute(
        &self,
        config: &Config,
        options: &PipelineOptions,
        sink: &dyn PipelineEventSink,
    ) -> PipelineResult {
        let mut result = PipelineResult::new();
        let root = options.root.as_path();

        let stages = [
            (Stage::Reset, options.reset),
            (Stage::Clear, options.clear),
            (Stage::Combine, options.combine),
            (Stage::Tokenize, options.tokenize),
        ];

        for (stage, requested) in stages {
            if !requested {
                continue;
            }

            tracing::info!(%stage, "starting stage");
            sink.on_event(PipelineEvent::StageStarted { stage });

            let errors_before = result.errors.len();
            match stage {
                Stage::Reset => self.reset(config, root, sink, &mut result),
                Stage::Clear => self.clear(config, root, sink, &mut result),
                Stage::Combine => self.combine(config, root, sink, &mut result),
                Stage::Tokenize => self.tokenize(config, root, sink, &mut result),
            }

            if result.errors.len() > errors_before {
                tracing::info!(%stage, "stage failed, stopping");
                result.failed_stage = Some(stage);
                break;
            }
        }

        result
    }

    /// Remove both stage directories and the ledger. Nothing here is fatal.
    fn reset(
        &self,
        config: &Config,
        root: &Path,
        sink: &dyn PipelineEventSink,
        result: &mut PipelineResult,
    ) {
        for dir in [&config.cleared_folder, &config.combined_folder] {
            let outcome = self.file_system.remove_dir_all(&root.join(dir));
            self.record_removal(Stage::Reset, PathBuf::from(dir), outcome, sink, result);
        }

        let ledger = &config.tokens_csv;
        let outcome = self.file_system.remove_file(&root.join(ledger));
        self.record_removal(Stage::Reset, PathBuf::from(ledger), outcome, sink, result);
    }

    fn clear(
        &self,
        config: &Config,
        root: &Path,
        sink: &dyn PipelineEventSink,
        result: &mut PipelineResult,
    ) {
        let cleared_dir = PathBuf::from(&config.cleared_folder);
        if let Err(e) = self.file_system.create_dir_all(&root.join(&cleared_dir)) {
            self.fail_item(Stage::Clear, cleared_dir, e.to_string(), sink, result);
            return;
        }

        let stripper = CommentStripper::with_banner(config.clear_banner.clone());

        for source in &config.remove_comments {
            let safe = match SafePath::new(source) {
                Ok(safe) => safe,
                Err(e) => {
                    let message = DocbundleError::UnsafePath {
                        path: source.into(),
                        source: e,
                    }
                    .to_string();
                    self.fail_item(Stage::Clear, PathBuf::from(source), message, sink, result);
                    continue;
                }
            };

            let text = match self.file_system.read(&root.join(safe.as_path())) {
                Ok(text) => text,
                Err(e) => {
                    let path = PathBuf::from(source);
                    self.fail_item(Stage::Clear, path, e.to_string(), sink, result);
                    continue;
                }
            };

            let target = safe.under(&cleared_dir);
            let output = StageOutput::new(Stage::Clear, target, stripper.strip(&text));
            if let Err(e) = self.persist(&output, root, sink, result) {
                let path = output.path().to_path_buf();
                self.fail_item(Stage::Clear, path, e.to_string(), sink, result);
            }
        }
    }

    fn combine(
        &self,
        config: &Config,
        root: &Path,
        sink: &dyn PipelineEventSink,
        result: &mut PipelineResult,
    ) {
        let combined_dir = PathBuf::from(&config.combined_folder);
        if let Err(e) = self.file_system.create_dir_all(&root.join(&combined_dir)) {
            self.fail_item(Stage::Combine, combined_dir, e.to_string(), sink, result);
            return;
        }

        let classifier = PathClassifier::new(&config.cleared_folder, &config.combined_folder);
        let bundler = Bundler::new(&self.file_system, root, &classifier);
        let errors_before = result.errors.len();

        for spec in config.combinations() {
            let file_name = spec.file_name(&config.combined_extension);
            let target = match SafePath::new(&file_name) {
                Ok(safe) => safe.under(&combined_dir),
                Err(e) => {
                    let message = DocbundleError::UnsafePath {
                        path: file_name.clone().into(),
                        source: e,
                    }
                    .to_string();
                    let path = PathBuf::from(file_name);
                    self.fail_item(Stage::Combine, path, message, sink, result);
                    continue;
                }
            };

            let document = match bundler.bundle(&spec) {
                Ok(document) => document,
                Err(e) => {
                    self.fail_item(Stage::Combine, target, e.to_string(), sink, result);
                    continue;
                }
            };

            let output = StageOutput::new(Stage::Combine, target, document);
            if let Err(e) = self.persist(&output, root, sink, result) {
                let path = output.path().to_path_buf();
                self.fail_item(Stage::Combine, path, e.to_string(), sink, result);
            }
        }

        // The cleared tree is only disposable once every bundle is built
        if config.delete_cleared && result.errors.len() == errors_before {
            let cleared = &config.cleared_folder;
            let outcome = self.file_system.remove_dir_all(&root.join(cleared));
            self.record_removal(Stage::Combine, PathBuf::from(cleared), outcome, sink, result);
        }
    }

    /// Count `files` and merge the counts into the ledger at `ledger_path`
    /// without a configured run. Same all-or-nothing rule as the tokenize
    /// stage.
    pub fn tokenize_files(
        &self,
        root: &Path,
        ledger_path: &Path,
        files: &[String],
        sink: &dyn PipelineEventSink,
    ) -> PipelineResult {
        let mut result = PipelineResult::new();
        sink.on_event(PipelineEvent::StageStarted {
            stage: Stage::Tokenize,
        });

        self.tokenize_into(root, ledger_path, files, sink, &mut result);
        if !result.errors.is_empty() {
            result.failed_stage = Some(Stage::Tokenize);
        }
        result
    }

    fn tokenize(
        &self,
        config: &Config,
        root: &Path,
        sink: &dyn PipelineEventSink,
        result: &mut PipelineResult,
    ) {
        let ledger_path = Path::new(&config.tokens_csv);
        self.tokenize_into(root, ledger_path, &config.tokenizer.files, sink, result);
    }

    fn tokenize_into(
        &self,
        root: &Path,
        ledger_path: &Path,
        files: &[String],
        sink: &dyn PipelineEventSink,
        result: &mut PipelineResult,
    ) {
        let Some(tokenizer) = &self.tokenizer else {
            result
                .errors
                .push("tokenize requested but no tokenizer is configured".to_string());
            return;
        };

        let ledger_path = ledger_path.to_path_buf();
        let mut ledger = match self.ledger_repo.load(&root.join(&ledger_path)) {
            Ok(ledger) => ledger,
            Err(e) => {
                self.fail_item(Stage::Tokenize, ledger_path, e.to_string(), sink, result);
                return;
            }
        };

        let mut counted = Vec::with_capacity(files.len());
        for file in files {
            let content = match self.file_system.read(&root.join(file)) {
                Ok(content) => content,
                Err(e) => {
                    let path = PathBuf::from(file);
                    self.fail_item(Stage::Tokenize, path, e.to_string(), sink, result);
                    return;
                }
            };

            let tokens = match tokenizer.count_tokens(&content) {
                Ok(tokens) => tokens,
                Err(source) => {
                    tracing::error!(file = %file, error = %source, "tokenizer call failed");
                    let message = DocbundleError::Tokenize {
                        file: file.clone(),
                        source,
                    }
                    .to_string();
                    self.fail_item(Stage::Tokenize, PathBuf::from(file), message, sink, result);
                    return;
                }
            };

            sink.on_event(PipelineEvent::Tokenized {
                file: file.clone(),
                tokens,
            });
            counted.push((file.clone(), tokens));
        }

        let now = chrono::Local::now().format(LEDGER_TIME_FORMAT).to_string();
        for (file, tokens) in &counted {
            ledger.upsert(file.clone(), LedgerEntry::new(*tokens, now.clone()));
        }

        if let Err(e) = self.ledger_repo.save(&ledger, &root.join(&ledger_path)) {
            self.fail_item(Stage::Tokenize, ledger_path, e.to_string(), sink, result);
            return;
        }

        sink.on_event(PipelineEvent::LedgerWritten {
            path: ledger_path,
            entries: ledger.len(),
        });
        result.tokenized.extend(counted);
    }

    /// Write `output` unless the file on disk already holds the same text
    fn persist(
        &self,
        output: &StageOutput,
        root: &Path,
        sink: &dyn PipelineEventSink,
        result: &mut PipelineResult,
    ) -> FsResult<()> {
        let stage = output.stage();
        let full_path = root.join(output.path());

        if !needs_write(&self.file_system, &full_path, output.content())? {
            tracing::debug!(path = %output.path().display(), "up-to-date, skipping");
            result.skipped.push(output.path().to_path_buf());
            sink.on_event(PipelineEvent::Skipped {
                stage,
                path: output.path().to_path_buf(),
            });
            return Ok(());
        }

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.file_system.create_dir_all(parent)?;
            }
        }
        self.file_system.write(&full_path, output.content())?;

        result.written.push(output.path().to_path_buf());
        sink.on_event(PipelineEvent::Written {
            stage,
            path: output.path().to_path_buf(),
        });
        Ok(())
    }

    /// Removal outcome: absence is success, other failures become warnings
    fn record_removal(
        &self,
        stage: Stage,
        path: PathBuf,
        outcome: FsResult<()>,
        sink: &dyn PipelineEventSink,
        result: &mut PipelineResult,
    ) {
        match outcome {
            Ok(()) => {
                result.removed.push(path.clone());
                sink.on_event(PipelineEvent::Removed { stage, path });
            }
            Err(FsError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "already absent");
            }
            Err(e) => {
                let message = format!("could not remove {}: {}", path.display(), e);
                tracing::warn!("{}", message);
                result.warnings.push(message.clone());
                sink.on_event(PipelineEvent::Warning { stage, message });
            }
        }
    }

    fn fail_item(
        &self,
        stage: Stage,
        path: PathBuf,
        error: String,
        sink: &dyn PipelineEventSink,
        result: &mut PipelineResult,
    ) {
        result.errors.push(format!("{}: {}", path.display(), error));
        sink.on_event(PipelineEvent::ItemFailed { stage, path, error });
    }
}

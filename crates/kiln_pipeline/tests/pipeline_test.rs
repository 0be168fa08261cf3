//! End-to-end pipeline behaviour against recording mocks.

use async_trait::async_trait;
use kiln_core::{
    Category, GenerateRequest, GenerateResponse, GenerationRequest, Role, ValidationResult,
};
use kiln_error::{BackendError, KilnResult};
use kiln_interface::{ArtifactChecker, ContextFetcher, KilnDriver};
use kiln_manifest::ManifestStore;
use kiln_pipeline::{
    ComponentPipeline, GenerationSettings, MAX_REPAIR_ATTEMPTS, ProjectLayout, PromptAssembler,
    PromptLibrary, REPAIR_LEAD_IN,
};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Replays canned replies and records every request.
#[derive(Default)]
struct MockDriver {
    replies: Mutex<VecDeque<KilnResult<String>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockDriver {
    fn replying(replies: Vec<&str>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.to_string())).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::from([Err(BackendError::new("connection refused").into())])),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn user_prompts(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| {
                let user = r.messages().last().unwrap();
                assert_eq!(*user.role(), Role::User);
                user.content().clone()
            })
            .collect()
    }
}

#[async_trait]
impl KilnDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> KilnResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected backend call");
        reply.map(GenerateResponse::new)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Returns scripted results and snapshots the artifact at every check.
struct MockChecker {
    results: Mutex<VecDeque<ValidationResult>>,
    seen: Mutex<Vec<(PathBuf, String)>>,
}

impl MockChecker {
    fn scripted(results: Vec<ValidationResult>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<(PathBuf, String)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactChecker for MockChecker {
    async fn check(&self, path: &Path) -> ValidationResult {
        let contents = std::fs::read_to_string(path).unwrap();
        self.seen.lock().unwrap().push((path.to_path_buf(), contents));
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ValidationResult::Clean)
    }
}

#[derive(Default)]
struct MockFetcher {
    fetched: Mutex<Vec<String>>,
}

#[async_trait]
impl ContextFetcher for MockFetcher {
    async fn fetch_url(&self, url: &str) -> String {
        self.fetched.lock().unwrap().push(url.to_string());
        format!("page text of {}", url)
    }

    fn describe_image(&self, url: &str) -> String {
        format!("Use the image at {}", url)
    }
}

fn library() -> PromptLibrary {
    PromptLibrary::builtin().unwrap()
}

fn pipeline(
    dir: &TempDir,
    driver: Arc<MockDriver>,
    checker: Arc<MockChecker>,
    fetcher: Arc<MockFetcher>,
) -> ComponentPipeline<Arc<MockDriver>> {
    ComponentPipeline::new(
        driver,
        checker,
        fetcher,
        PromptAssembler::new(library()),
        GenerationSettings::default(),
        ProjectLayout::under(dir.path()),
    )
}

fn magnetic_button() -> GenerationRequest {
    GenerationRequest::parse("magnetic button", "micro-interactions").unwrap()
}

#[tokio::test]
async fn test_clean_first_pass_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let driver = MockDriver::replying(vec!["```tsx\nexport default function MagneticButton() {}\n```"]);
    let checker = MockChecker::scripted(vec![ValidationResult::Clean]);
    let pipeline = pipeline(&dir, driver.clone(), checker.clone(), Arc::default());

    let outcome = pipeline.generate(&magnetic_button()).await.unwrap();

    assert_eq!(outcome.name(), "MagneticButton");
    assert_eq!(outcome.relative_path(), "micro-interactions/MagneticButton.tsx");
    assert_eq!(
        outcome.file_path(),
        &dir.path()
            .join("generated_components")
            .join("micro-interactions")
            .join("MagneticButton.tsx")
    );
    assert_eq!(*outcome.attempts(), 1);
    assert_eq!(*outcome.validation(), ValidationResult::Clean);
    assert_eq!(driver.requests().len(), 1);
    assert_eq!(checker.seen().len(), 1);
    assert_eq!(
        std::fs::read_to_string(outcome.file_path()).unwrap(),
        "export default function MagneticButton() {}"
    );

    let entries = ManifestStore::new(dir.path().join("generated_components/index.json"))
        .load()
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(*entries[0].category(), Category::MicroInteractions);
    assert_eq!(entries[0].file(), "micro-interactions/MagneticButton.tsx");
    assert_eq!(entries[0].prompt(), "magnetic button");
}

#[tokio::test]
async fn test_request_carries_fixed_settings() {
    let dir = tempfile::tempdir().unwrap();
    let driver = MockDriver::replying(vec!["x"]);
    let pipeline = pipeline(&dir, driver.clone(), MockChecker::scripted(vec![]), Arc::default());

    pipeline.generate(&magnetic_button()).await.unwrap();

    let request = &driver.requests()[0];
    assert_eq!(request.model(), "openai/gpt-oss-20b");
    assert_eq!(*request.temperature(), 0.2);
    assert_eq!(*request.max_tokens(), 4096);
    assert_eq!(request.messages().len(), 2);
    assert_eq!(*request.messages()[0].role(), Role::System);
}

#[tokio::test]
async fn test_failed_then_clean_repairs_once() {
    let dir = tempfile::tempdir().unwrap();
    let diagnostic = "MagneticButton.tsx(4,7): error TS2304: Cannot find name 'X'.";
    let driver = MockDriver::replying(vec!["const broken = X;", "```tsx\nconst fixed = 1;\n```"]);
    let checker = MockChecker::scripted(vec![
        ValidationResult::Failed(diagnostic.to_string()),
        ValidationResult::Clean,
    ]);
    let pipeline = pipeline(&dir, driver.clone(), checker.clone(), Arc::default());

    let outcome = pipeline.generate(&magnetic_button()).await.unwrap();

    assert_eq!(*outcome.attempts(), 2);
    assert!(!outcome.has_issues());

    let prompts = driver.user_prompts();
    assert_eq!(prompts.len(), 2);
    assert!(!prompts[0].contains(REPAIR_LEAD_IN));
    assert!(prompts[1].ends_with(&format!("{}\n{}", REPAIR_LEAD_IN, diagnostic)));

    let seen = checker.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, seen[1].0, "both writes target the same file");
    assert_eq!(seen[0].1, "const broken = X;");
    assert_eq!(seen[1].1, "const fixed = 1;");
    assert_eq!(std::fs::read_to_string(outcome.file_path()).unwrap(), "const fixed = 1;");

    let entries = pipeline.manifest().load().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].prompt(), "magnetic button");
}

#[tokio::test]
async fn test_repeated_failure_keeps_last_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let long_diagnostic = format!("error TS1005: {}", "x".repeat(1200));
    let driver = MockDriver::replying(vec!["first", "second"]);
    let checker = MockChecker::scripted(vec![
        ValidationResult::Failed(long_diagnostic.clone()),
        ValidationResult::Failed("still broken".to_string()),
    ]);
    let pipeline = pipeline(&dir, driver.clone(), checker.clone(), Arc::default());

    let outcome = pipeline.generate(&magnetic_button()).await.unwrap();

    assert_eq!(*outcome.attempts(), 1 + MAX_REPAIR_ATTEMPTS);
    assert_eq!(outcome.validation().diagnostic(), Some("still broken"));
    assert_eq!(driver.requests().len(), 2);
    // The full diagnostic reaches the repair prompt.
    assert!(driver.user_prompts()[1].contains(&long_diagnostic));
    assert_eq!(std::fs::read_to_string(outcome.file_path()).unwrap(), "second");
    assert_eq!(pipeline.manifest().load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_backend_failure_aborts_without_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let checker = MockChecker::scripted(vec![]);
    let pipeline = pipeline(&dir, MockDriver::failing(), checker.clone(), Arc::default());

    let err = pipeline.generate(&magnetic_button()).await.unwrap_err();

    assert!(err.is_backend());
    assert!(checker.seen().is_empty());
    assert!(pipeline.manifest().load().await.unwrap().is_empty());
    assert!(!dir.path().join("generated_components/index.json").exists());
}

#[tokio::test]
async fn test_unknown_category_rejected_before_any_work() {
    let dir = tempfile::tempdir().unwrap();
    let driver = MockDriver::replying(vec![]);

    let err = GenerationRequest::parse("magnetic button", "widgets").unwrap_err();
    assert!(err.is_config());

    // Nothing was constructed that could reach the backend or the disk.
    assert!(driver.requests().is_empty());
    assert!(!dir.path().join("generated_components").exists());
}

#[tokio::test]
async fn test_context_blocks_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let driver = MockDriver::replying(vec!["x"]);
    let fetcher = Arc::new(MockFetcher::default());
    let pipeline = pipeline(&dir, driver.clone(), MockChecker::scripted(vec![]), fetcher.clone());

    let request = GenerationRequest::parse("aurora background", "shader-backgrounds")
        .unwrap()
        .with_reference_url(Some("https://example.com/ref".to_string()))
        .with_reference_image(Some("https://example.com/mood.jpg".to_string()));
    pipeline.generate(&request).await.unwrap();

    assert_eq!(*fetcher.fetched.lock().unwrap(), vec!["https://example.com/ref".to_string()]);
    assert_eq!(
        driver.user_prompts()[0],
        "Category: shader-backgrounds\n\nDescription: aurora background\
         \n\nREFERENCE PAGE CONTENT:\npage text of https://example.com/ref\
         \n\nUse the image at https://example.com/mood.jpg"
    );
}

#[tokio::test]
async fn test_same_name_upserts_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let driver = MockDriver::replying(vec!["a", "b", "c"]);
    let pipeline = pipeline(&dir, driver, MockChecker::scripted(vec![]), Arc::default());

    pipeline.generate(&magnetic_button()).await.unwrap();
    pipeline
        .generate(&GenerationRequest::parse("pulse loader", "micro-interactions").unwrap())
        .await
        .unwrap();
    let again = GenerationRequest::parse("a magnetic button, reworked", "page-transitions")
        .unwrap()
        .with_name(Some("MagneticButton".to_string()));
    pipeline.generate(&again).await.unwrap();

    let entries = pipeline.manifest().load().await.unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name().as_str()).collect();
    assert_eq!(names, vec!["MagneticButton", "PulseLoader"]);
    assert_eq!(entries[0].prompt(), "a magnetic button, reworked");
    assert_eq!(*entries[0].category(), Category::PageTransitions);
    assert_eq!(entries[1].prompt(), "pulse loader");
}

#[tokio::test]
async fn test_invalid_explicit_name_makes_no_call() {
    let dir = tempfile::tempdir().unwrap();
    let driver = MockDriver::replying(vec![]);
    let pipeline = pipeline(&dir, driver.clone(), MockChecker::scripted(vec![]), Arc::default());

    let request = magnetic_button().with_name(Some("../outside".to_string()));
    let err = pipeline.generate(&request).await.unwrap_err();

    assert!(err.is_config());
    assert!(driver.requests().is_empty());
}

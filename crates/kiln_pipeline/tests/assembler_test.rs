use kiln_core::{Category, FewShotExample};
use kiln_pipeline::{FEW_SHOT_HEADER, PromptAssembler, PromptLibrary};

fn assembler() -> PromptAssembler {
    PromptAssembler::new(PromptLibrary::new(
        "BASE",
        vec![
            FewShotExample::new(Category::MicroInteractions, "first toggle", "<A />"),
            FewShotExample::new(Category::ThreeDScenes, "a cube", "<Cube />"),
            FewShotExample::new(Category::MicroInteractions, "second loader", "<B />"),
        ],
    ))
}

#[test]
fn test_system_message_filters_and_keeps_order() {
    let system = assembler().system_message(Category::MicroInteractions);
    assert_eq!(
        system,
        "BASE\n\nFEW-SHOT EXAMPLES:\n\
         \nUser: first toggle\nAssistant:\n<A />\n\
         \nUser: second loader\nAssistant:\n<B />\n"
    );
    assert!(!system.contains("a cube"));
}

#[test]
fn test_system_message_without_examples_is_base_prompt() {
    let system = assembler().system_message(Category::PageTransitions);
    assert_eq!(system, "BASE");
    assert!(!system.contains(FEW_SHOT_HEADER.trim()));
}

#[test]
fn test_user_message_blocks() {
    let assembler = assembler();
    assert_eq!(
        assembler.user_message("spinning cube", Category::ThreeDScenes, None, None, None),
        "Category: 3d-scenes\n\nDescription: spinning cube"
    );
    assert_eq!(
        assembler.user_message(
            "spinning cube",
            Category::ThreeDScenes,
            Some("PAGE"),
            Some("IMAGE"),
            Some("TS2304"),
        ),
        "Category: 3d-scenes\n\nDescription: spinning cube\
         \n\nREFERENCE PAGE CONTENT:\nPAGE\
         \n\nIMAGE\
         \n\nThe previous attempt had this TypeScript error, please fix it:\nTS2304"
    );
}

#[test]
fn test_assemble_starts_with_single_system_message() {
    let conversation =
        assembler().assemble("spinning cube", Category::ThreeDScenes, None, None, Some("err"));
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.system().content(), &assembler().system_message(Category::ThreeDScenes));
    assert_eq!(conversation.last_user().map(|m| m.content().ends_with("\nerr")), Some(true));
}

#[tokio::test]
async fn test_library_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("system_creative.txt"), "Custom prompt").unwrap();
    std::fs::write(
        dir.path().join("few_shot_examples.json"),
        r#"[{"category": "page-transitions", "prompt": "wipe", "output_snippet": "<Wipe />"}]"#,
    )
    .unwrap();

    let library = PromptLibrary::from_dir(dir.path()).await.unwrap();
    assert_eq!(library.system_prompt(), "Custom prompt");
    assert_eq!(library.examples_for(Category::PageTransitions).count(), 1);
    assert_eq!(library.examples_for(Category::ThreeDScenes).count(), 0);
}

#[tokio::test]
async fn test_library_from_dir_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(PromptLibrary::from_dir(dir.path()).await.is_err());
}

#[tokio::test]
async fn test_library_from_dir_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("system_creative.txt"), "p").unwrap();
    std::fs::write(dir.path().join("few_shot_examples.json"), "[{\"category\": \"widgets\"}]").unwrap();
    let err = PromptLibrary::from_dir(dir.path()).await.unwrap_err();
    assert!(err.to_string().contains("few-shot"));
}

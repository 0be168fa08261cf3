//! Conversation assembly for one generation attempt.

use crate::PromptLibrary;
use kiln_core::{Category, Conversation};

/// Header appended to the system prompt when the category has examples.
pub const FEW_SHOT_HEADER: &str = "\n\nFEW-SHOT EXAMPLES:\n";
/// Label of the fetched reference page block.
pub const REFERENCE_PAGE_LABEL: &str = "REFERENCE PAGE CONTENT:";
/// Lead-in of the repair block carrying the previous diagnostic.
pub const REPAIR_LEAD_IN: &str = "The previous attempt had this TypeScript error, please fix it:";

/// Builds the system and user messages for a request.
///
/// Assembly is a pure function of its inputs: the same description, category
/// and context always produce the same conversation.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    library: PromptLibrary,
}

impl PromptAssembler {
    /// Creates an assembler over the given prompt material.
    pub fn new(library: PromptLibrary) -> Self {
        Self { library }
    }

    /// The prompt material in use.
    pub fn library(&self) -> &PromptLibrary {
        &self.library
    }

    /// Base system prompt followed by the category's few-shot exchanges.
    ///
    /// The few-shot block is omitted entirely when no example matches.
    pub fn system_message(&self, category: Category) -> String {
        let mut system = self.library.system_prompt().clone();
        let mut examples = self.library.examples_for(category).peekable();
        if examples.peek().is_some() {
            system.push_str(FEW_SHOT_HEADER);
            for example in examples {
                system.push_str(&format!(
                    "\nUser: {}\nAssistant:\n{}\n",
                    example.prompt(),
                    example.output_snippet()
                ));
            }
        }
        system
    }

    /// User message: category and description, then each optional block in order.
    pub fn user_message(
        &self,
        description: &str,
        category: Category,
        url_context: Option<&str>,
        image_context: Option<&str>,
        prior_error: Option<&str>,
    ) -> String {
        let mut content = format!("Category: {}\n\nDescription: {}", category, description);
        if let Some(page) = url_context {
            content.push_str(&format!("\n\n{}\n{}", REFERENCE_PAGE_LABEL, page));
        }
        if let Some(image) = image_context {
            content.push_str(&format!("\n\n{}", image));
        }
        if let Some(diagnostic) = prior_error {
            content.push_str(&format!("\n\n{}\n{}", REPAIR_LEAD_IN, diagnostic));
        }
        content
    }

    /// Full conversation: one system message followed by one user message.
    ///
    /// # Examples
    ///
    /// ```
    /// use kiln_core::{Category, FewShotExample, Role};
    /// use kiln_pipeline::{PromptAssembler, PromptLibrary};
    ///
    /// let library = PromptLibrary::new(
    ///     "Write components.",
    ///     vec![FewShotExample::new(Category::MicroInteractions, "a toggle", "<Toggle />")],
    /// );
    /// let conversation = PromptAssembler::new(library).assemble(
    ///     "magnetic button",
    ///     Category::MicroInteractions,
    ///     None,
    ///     None,
    ///     None,
    /// );
    ///
    /// assert_eq!(conversation.len(), 2);
    /// assert!(conversation.system().content().contains("User: a toggle"));
    /// assert_eq!(
    ///     conversation.messages()[1].content(),
    ///     "Category: micro-interactions\n\nDescription: magnetic button"
    /// );
    /// assert_eq!(*conversation.messages()[1].role(), Role::User);
    /// ```
    pub fn assemble(
        &self,
        description: &str,
        category: Category,
        url_context: Option<&str>,
        image_context: Option<&str>,
        prior_error: Option<&str>,
    ) -> Conversation {
        Conversation::new(self.system_message(category)).with_user(self.user_message(
            description,
            category,
            url_context,
            image_context,
            prior_error,
        ))
    }
}

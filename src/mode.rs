//! Chat modes and their system prompts.

use std::fmt;

use crate::ui::Style;

const CONVERSATION_PROMPT: &str =
    "당신은 친절하고 도움이 되는 AI 어시스턴트입니다. 한국어로 자연스럽게 대답해주세요.";

const TRANSLATION_PROMPT: &str = "당신은 전문적인 영어→한국어 번역가입니다.
규칙:
1. 영어 텍스트를 정확하고 자연스럽게 한국어로 번역합니다.
2. 원문의 의미를 최대한 유지합니다.
3. 전문용어는 한국어 표준 번역어를 사용합니다.
4. 번역 결과만 출력합니다. 설명 불필요.";

const DOCUMENT_PROMPT: &str = "당신은 전문적인 문서 번역가입니다.
규칙:
1. 영어 문서 전체를 한국어로 번역합니다.
2. 원본의 형식(제목, 단락, 구조)을 유지합니다.
3. 전문용어는 한국어 표준 번역어를 사용합니다.
4. 번역된 문서만 출력합니다.";

/// A named system-prompt configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Free conversation in Korean.
    Conversation,
    /// English to Korean sentence translation.
    #[default]
    Translation,
    /// Whole-document translation preserving structure.
    DocumentTranslation,
}

impl Mode {
    /// Every mode, in display order.
    pub const ALL: [Self; 3] = [
        Self::Conversation,
        Self::Translation,
        Self::DocumentTranslation,
    ];

    /// Looks up a mode by its registry name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }

    /// The name users type after `mode`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conversation => "대화",
            Self::Translation => "번역",
            Self::DocumentTranslation => "문서번역",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Conversation => "General conversation",
            Self::Translation => "English to Korean translation",
            Self::DocumentTranslation => "Whole-document translation",
        }
    }

    pub const fn system_prompt(self) -> &'static str {
        match self {
            Self::Conversation => CONVERSATION_PROMPT,
            Self::Translation => TRANSLATION_PROMPT,
            Self::DocumentTranslation => DOCUMENT_PROMPT,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the system prompt registered for `name`, if any.
pub fn lookup(name: &str) -> Option<&'static str> {
    Mode::from_name(name).map(Mode::system_prompt)
}

/// Comma-separated list of valid mode names, for error messages.
pub fn available_names() -> String {
    Mode::ALL
        .iter()
        .map(|mode| mode.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints all modes with their descriptions to stdout.
pub fn print_modes() {
    for mode in Mode::ALL {
        println!(
            "  {} {}",
            Style::command(format!("mode {:<6}", mode.name())),
            Style::secondary(mode.description())
        );
    }
}

use rowan::TextRange;

/// Diagnostic kinds, grouped by the compilation stage that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Tokenizer
    UnrecognizedCharacter,

    // Grammar violations
    UnexpectedToken,
    UnexpectedEof,

    // Names and definitions
    DuplicateDuration,
    DuplicateIntensity,
    UndefinedDuration,
    UndefinedIntensity,
    DuplicateWeekday,
    DuplicateWeek,

    // Literal values that parse but cannot be represented
    InvalidInteger,
    InvalidDistance,
    InvalidPace,
    InvalidDate,

    // Accepted, but probably not what the author meant
    CredentialRedefined,
}

/// Error category a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Lexical,
    Syntax,
    Definition,
    Value,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::CredentialRedefined => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::UnrecognizedCharacter => ErrorClass::Lexical,
            Self::UnexpectedToken | Self::UnexpectedEof => ErrorClass::Syntax,
            Self::DuplicateDuration
            | Self::DuplicateIntensity
            | Self::UndefinedDuration
            | Self::UndefinedIntensity
            | Self::DuplicateWeekday
            | Self::DuplicateWeek
            | Self::CredentialRedefined => ErrorClass::Definition,
            Self::InvalidInteger | Self::InvalidDistance | Self::InvalidPace | Self::InvalidDate => {
                ErrorClass::Value
            }
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UndefinedDuration => Some("define it in a `durations { ... }` block first"),
            Self::UndefinedIntensity => Some("define it in an `intensities { ... }` block first"),
            Self::InvalidPace => Some("a pace is written as minutes per kilometer, e.g. `5:30`"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnrecognizedCharacter => "unrecognized character",

            Self::UnexpectedToken => "unexpected token",
            Self::UnexpectedEof => "unexpected end of input",

            Self::DuplicateDuration => "duration is already defined",
            Self::DuplicateIntensity => "intensity is already defined",
            Self::UndefinedDuration => "undefined duration",
            Self::UndefinedIntensity => "undefined intensity",
            Self::DuplicateWeekday => "day is already scheduled in this week",
            Self::DuplicateWeek => "week is already defined in this program",

            Self::InvalidInteger => "integer out of range",
            Self::InvalidDistance => "distance out of range",
            Self::InvalidPace => "pace cannot be zero",
            Self::InvalidDate => "invalid date",

            Self::CredentialRedefined => "credential is set more than once",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateDuration => "duration `{}` is already defined".to_string(),
            Self::DuplicateIntensity => "intensity `{}` is already defined".to_string(),
            Self::UndefinedDuration => "duration `{}` is not defined".to_string(),
            Self::UndefinedIntensity => "intensity `{}` is not defined".to_string(),
            Self::DuplicateWeekday => "`{}` is already scheduled in this week".to_string(),
            Self::DuplicateWeek => "week {} is already defined in this program".to_string(),
            Self::CredentialRedefined => "`{}` is set more than once; the last value wins".to_string(),

            // Syntax errors carry the whole sentence
            Self::UnexpectedToken | Self::UnexpectedEof => "{}".to_string(),

            // Standard pattern: fallback + context
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorClass::Lexical => write!(f, "lexical"),
            ErrorClass::Syntax => write!(f, "syntax"),
            ErrorClass::Definition => write!(f, "definition"),
            ErrorClass::Value => write!(f, "value"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub range: TextRange,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub range: TextRange,
    pub message: String,
    pub related: Vec<RelatedInfo>,
    pub hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}

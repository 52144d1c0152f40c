//! Token kinds for the workout description language.
//!
//! Logos recognizes the raw lexical classes. Bare words and quoted names are
//! classified afterwards (keyword, weekday, integer, repeat count, identifier),
//! so the post-classified kinds carry no token/regex attributes.

use logos::Logos;

/// All token kinds. Raw kinds first, then post-classified kinds.
/// `#[repr(u16)]` keeps discriminants small enough for [`TokenSet`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenKind {
    #[token("{")]
    BraceOpen = 0,

    #[token("}")]
    BraceClose,

    #[token("-")]
    Hyphen,

    #[token("@")]
    At,

    /// `[h:]m:s`, e.g. `5:30` or `1:05:00`
    #[regex(r"([0-9]+:)?[0-5]?[0-9]:[0-5]?[0-9]")]
    Time,

    /// At most two fractional digits: `5.`, `5.25`, `.5`
    #[regex(r"[0-9]+\.([0-9][0-9]?)?")]
    #[regex(r"\.[0-9][0-9]?")]
    Float,

    #[regex(r"[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]")]
    Date,

    /// Short name, optionally followed by a `*` repeat marker.
    /// Classified into keywords, weekdays, integers and identifiers.
    #[regex(r"[a-zA-Z0-9_]+([ \t]*\*)?")]
    Word,

    /// Quoted long name; always an identifier. Wins over `StringLit` on equal length.
    #[regex(r#""[a-zA-Z0-9_ ]+"([ \t]*\*)?"#, priority = 10)]
    #[regex(r"'[a-zA-Z0-9_ ]+'([ \t]*\*)?", priority = 10)]
    QuotedName,

    /// Double-quoted text with backslash escapes, e.g. credentials.
    #[regex(r#""([^"\r\n\\]|\\[^\r\n])*""#)]
    StringLit,

    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"\n+")]
    Newline,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    // Post-classified from `Word` / `QuotedName`
    Id,
    Int,
    /// Integer followed by `*`: a repeat count.
    IntRep,
    Weekday,

    KwCal,
    KwPower,
    KwBpm,
    KwSpm,
    KwHr,
    KwZone,
    /// `w` (watts)
    KwWatts,
    KwRun,
    KwStrength,
    KwWarmup,
    KwCooldown,
    KwRecover,
    KwRest,
    KwOther,
    KwAbove,
    KwBelow,
    KwIntensities,
    KwDurations,
    KwGarmin,
    KwUsername,
    KwPassword,
    KwProgram,
    KwPlan,
    KwWeek,

    /// One character no rule accepts.
    Garbage,
}

use TokenKind::*;

impl TokenKind {
    /// Looks up a reserved word. Keywords are case sensitive and never carry a `*` marker.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "cal" => KwCal,
            "power" => KwPower,
            "bpm" => KwBpm,
            "spm" => KwSpm,
            "hr" => KwHr,
            "zone" => KwZone,
            "w" => KwWatts,
            "run" => KwRun,
            "strength" => KwStrength,
            "warmup" => KwWarmup,
            "cooldown" => KwCooldown,
            "recover" => KwRecover,
            "rest" => KwRest,
            "other" => KwOther,
            "above" => KwAbove,
            "below" => KwBelow,
            "intensities" => KwIntensities,
            "durations" => KwDurations,
            "garmin" => KwGarmin,
            "username" => KwUsername,
            "password" => KwPassword,
            "program" => KwProgram,
            "plan" => KwPlan,
            "week" => KwWeek,
            _ => return None,
        };
        Some(kind)
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | Comment)
    }

    /// Human-readable name used in "expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            BraceOpen => "`{`",
            BraceClose => "`}`",
            Hyphen => "`-`",
            At => "`@`",
            Time => "a time",
            Float => "a decimal number",
            Date => "a date",
            Word | Id | QuotedName => "a name",
            StringLit => "a string",
            Whitespace => "whitespace",
            Newline => "a newline",
            Comment => "a comment",
            Int => "an integer",
            IntRep => "a repeat count",
            Weekday => "a weekday",
            KwCal => "`cal`",
            KwPower => "`power`",
            KwBpm => "`bpm`",
            KwSpm => "`spm`",
            KwHr => "`hr`",
            KwZone => "`zone`",
            KwWatts => "`w`",
            KwRun => "`run`",
            KwStrength => "`strength`",
            KwWarmup => "`warmup`",
            KwCooldown => "`cooldown`",
            KwRecover => "`recover`",
            KwRest => "`rest`",
            KwOther => "`other`",
            KwAbove => "`above`",
            KwBelow => "`below`",
            KwIntensities => "`intensities`",
            KwDurations => "`durations`",
            KwGarmin => "`garmin`",
            KwUsername => "`username`",
            KwPassword => "`password`",
            KwProgram => "`program`",
            KwPlan => "`plan`",
            KwWeek => "`week`",
            Garbage => "an unrecognized character",
        }
    }
}

/// 64-bit bitset of `TokenKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "TokenKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries((0..64u64).filter(|i| self.0 & (1 << i) != 0))
            .finish()
    }
}

/// Token sets used to pick grammar alternatives.
pub mod token_sets {
    use super::*;

    /// Kinds that start a top-level definition.
    pub const DEFINITION_FIRST: TokenSet = TokenSet::new(&[
        KwDurations,
        KwIntensities,
        KwGarmin,
        KwRun,
        KwStrength,
        KwProgram,
        KwPlan,
    ]);

    pub const WORKOUT_TYPES: TokenSet = TokenSet::new(&[KwRun, KwStrength]);

    /// Kinds that start an exercise step.
    pub const STEP_TYPES: TokenSet =
        TokenSet::new(&[KwWarmup, KwCooldown, KwRun, KwRecover, KwRest, KwOther]);

    pub const STEP_FIRST: TokenSet = STEP_TYPES.union(TokenSet::new(&[IntRep]));

    /// Kinds that start an optional step duration.
    pub const DURATION_FIRST: TokenSet = TokenSet::new(&[Time, Int, Float, KwAbove, KwBelow, Id]);

    /// Kinds accepted as a credential value.
    pub const CREDENTIAL_VALUES: TokenSet = TokenSet::new(&[StringLit, Id]);
}

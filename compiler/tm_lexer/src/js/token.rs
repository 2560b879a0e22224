//! Token kinds of the JavaScript-family grammar.

use tm_lexer_core::{BStr, ByteSlice, TokenKind};

/// Token kind. Rule `n` of the generated tables produces the `n`-th kind
/// after [`Token::Eoi`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Token {
    InvalidToken,
    Eoi,

    // Identifiers and insignificant input
    Identifier,
    WhiteSpace,
    LineTerminatorSequence,
    MultiLineComment,
    SingleLineComment,

    // Keywords
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Export,
    Extends,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Return,
    Super,
    Switch,
    This,
    Throw,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,
    Await,
    Enum,
    Null,
    True,
    False,
    As,
    From,
    Get,
    Let,
    Of,
    Set,
    Static,
    Target,

    // Punctuators
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBrack,
    RBrack,
    Dot,
    DotDotDot,
    Semicolon,
    Comma,
    Lt,
    Gt,
    LtAssign,
    GtAssign,
    AssignAssign,
    ExclAssign,
    AssignAssignAssign,
    ExclAssignAssign,
    AssignGt,
    Plus,
    Minus,
    Mult,
    Div,
    Rem,
    MultMult,
    PlusPlus,
    MinusMinus,
    LtLt,
    GtGt,
    GtGtGt,
    And,
    Or,
    Xor,
    Excl,
    Tilde,
    AndAnd,
    OrOr,
    QuestQuest,
    Quest,
    QuestDot,
    Colon,
    Assign,
    PlusAssign,
    MinusAssign,
    MultAssign,
    DivAssign,
    RemAssign,
    MultMultAssign,
    LtLtAssign,
    GtGtAssign,
    GtGtGtAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    AndAndAssign,
    OrOrAssign,
    QuestQuestAssign,

    // Literals
    NumericLiteral,
    StringLiteral,
    NoSubstitutionTemplate,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,
    RegularExpressionLiteral,
}

impl Token {
    /// Fixed spelling of keywords and punctuators.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            Token::Break => "break",
            Token::Case => "case",
            Token::Catch => "catch",
            Token::Class => "class",
            Token::Const => "const",
            Token::Continue => "continue",
            Token::Debugger => "debugger",
            Token::Default => "default",
            Token::Delete => "delete",
            Token::Do => "do",
            Token::Else => "else",
            Token::Export => "export",
            Token::Extends => "extends",
            Token::Finally => "finally",
            Token::For => "for",
            Token::Function => "function",
            Token::If => "if",
            Token::Import => "import",
            Token::In => "in",
            Token::Instanceof => "instanceof",
            Token::New => "new",
            Token::Return => "return",
            Token::Super => "super",
            Token::Switch => "switch",
            Token::This => "this",
            Token::Throw => "throw",
            Token::Try => "try",
            Token::Typeof => "typeof",
            Token::Var => "var",
            Token::Void => "void",
            Token::While => "while",
            Token::With => "with",
            Token::Yield => "yield",
            Token::Await => "await",
            Token::Enum => "enum",
            Token::Null => "null",
            Token::True => "true",
            Token::False => "false",
            Token::As => "as",
            Token::From => "from",
            Token::Get => "get",
            Token::Let => "let",
            Token::Of => "of",
            Token::Set => "set",
            Token::Static => "static",
            Token::Target => "target",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrack => "[",
            Token::RBrack => "]",
            Token::Dot => ".",
            Token::DotDotDot => "...",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::LtAssign => "<=",
            Token::GtAssign => ">=",
            Token::AssignAssign => "==",
            Token::ExclAssign => "!=",
            Token::AssignAssignAssign => "===",
            Token::ExclAssignAssign => "!==",
            Token::AssignGt => "=>",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Mult => "*",
            Token::Div => "/",
            Token::Rem => "%",
            Token::MultMult => "**",
            Token::PlusPlus => "++",
            Token::MinusMinus => "--",
            Token::LtLt => "<<",
            Token::GtGt => ">>",
            Token::GtGtGt => ">>>",
            Token::And => "&",
            Token::Or => "|",
            Token::Xor => "^",
            Token::Excl => "!",
            Token::Tilde => "~",
            Token::AndAnd => "&&",
            Token::OrOr => "||",
            Token::QuestQuest => "??",
            Token::Quest => "?",
            Token::QuestDot => "?.",
            Token::Colon => ":",
            Token::Assign => "=",
            Token::PlusAssign => "+=",
            Token::MinusAssign => "-=",
            Token::MultAssign => "*=",
            Token::DivAssign => "/=",
            Token::RemAssign => "%=",
            Token::MultMultAssign => "**=",
            Token::LtLtAssign => "<<=",
            Token::GtGtAssign => ">>=",
            Token::GtGtGtAssign => ">>>=",
            Token::AndAssign => "&=",
            Token::OrAssign => "|=",
            Token::XorAssign => "^=",
            Token::AndAndAssign => "&&=",
            Token::OrOrAssign => "||=",
            Token::QuestQuestAssign => "??=",
            _ => return None,
        })
    }

    /// Reserved words and contextual keywords.
    pub const fn is_keyword(self) -> bool {
        let tag = self as u8;
        tag >= Token::Break as u8 && tag <= Token::Target as u8
    }

    pub const fn is_punctuator(self) -> bool {
        let tag = self as u8;
        tag >= Token::LBrace as u8 && tag <= Token::QuestQuestAssign as u8
    }

    /// Whitespace, line terminators and comments.
    pub const fn is_space(self) -> bool {
        matches!(
            self,
            Token::WhiteSpace
                | Token::LineTerminatorSequence
                | Token::MultiLineComment
                | Token::SingleLineComment
        )
    }

    /// Template literal pieces.
    pub const fn is_template(self) -> bool {
        matches!(
            self,
            Token::NoSubstitutionTemplate
                | Token::TemplateHead
                | Token::TemplateMiddle
                | Token::TemplateTail
        )
    }

    /// `true` if a `/` right after this token is a division operator rather
    /// than the start of a regular expression.
    pub const fn ends_expression(self) -> bool {
        matches!(
            self,
            Token::Identifier
                | Token::This
                | Token::Super
                | Token::Null
                | Token::True
                | Token::False
                | Token::As
                | Token::From
                | Token::Get
                | Token::Let
                | Token::Of
                | Token::Set
                | Token::Static
                | Token::Target
                | Token::RParen
                | Token::RBrack
                | Token::RBrace
                | Token::PlusPlus
                | Token::MinusMinus
                | Token::NumericLiteral
                | Token::StringLiteral
                | Token::NoSubstitutionTemplate
                | Token::TemplateTail
                | Token::RegularExpressionLiteral
        )
    }
}

impl TokenKind for Token {
    const EOI: Self = Token::Eoi;

    /// Numeric literals evaluate to their `f64` value.
    type Value = f64;

    fn value(self, text: &BStr) -> Option<f64> {
        match self {
            Token::NumericLiteral => numeric_value(text),
            _ => None,
        }
    }
}

/// Value of a decimal or `0x` hexadecimal literal.
fn numeric_value(text: &[u8]) -> Option<f64> {
    if let Some(digits) = text
        .strip_prefix(b"0x")
        .or_else(|| text.strip_prefix(b"0X"))
    {
        if digits.is_empty() {
            return None;
        }
        return digits.iter().try_fold(0f64, |acc, &b| {
            let digit = char::from(b).to_digit(16)?;
            Some(acc * 16.0 + f64::from(digit))
        });
    }
    text.to_str().ok()?.parse().ok()
}

#[cfg(test)]
mod tests;

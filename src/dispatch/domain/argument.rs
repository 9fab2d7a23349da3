//! Positional argument specifications for text commands.

use std::fmt;

/// One positional argument in a command's schema.
///
/// Specs are matched against whitespace-delimited tokens in declaration
/// order. Optional specs must form a suffix of the schema and a greedy tail
/// may only appear last; [`super::CommandDefinition::validate_schema`]
/// enforces both rules at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentSpec {
    /// A token that must be present. Renders as `<name>`.
    Required {
        /// Argument name shown in usage strings.
        name: String,
    },
    /// A token that may be omitted. Renders as `[name]`.
    Optional {
        /// Argument name shown in usage strings.
        name: String,
    },
    /// A token restricted to a fixed, case-insensitive option set.
    ///
    /// Renders as `<a|b>` when required and `[a|b]` when optional.
    Choice {
        /// Argument name used for lookups by handlers.
        name: String,
        /// Accepted values, stored lowercase.
        options: Vec<String>,
        /// Whether the token must be present.
        required: bool,
    },
    /// Absorbs every remaining token, joined by single spaces.
    ///
    /// Renders as `[name...]`; an empty tail is allowed.
    Greedy {
        /// Argument name shown in usage strings.
        name: String,
    },
}

impl ArgumentSpec {
    /// Creates a required argument.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self::Required { name: name.into() }
    }

    /// Creates an optional argument.
    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self::Optional { name: name.into() }
    }

    /// Creates a required enumerated-choice argument.
    #[must_use]
    pub fn choice(
        name: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Choice {
            name: name.into(),
            options: fold_options(options),
            required: true,
        }
    }

    /// Creates an optional enumerated-choice argument.
    #[must_use]
    pub fn optional_choice(
        name: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Choice {
            name: name.into(),
            options: fold_options(options),
            required: false,
        }
    }

    /// Creates a greedy tail argument.
    #[must_use]
    pub fn greedy(name: impl Into<String>) -> Self {
        Self::Greedy { name: name.into() }
    }

    /// Returns the argument name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Required { name }
            | Self::Optional { name }
            | Self::Choice { name, .. }
            | Self::Greedy { name } => name,
        }
    }

    /// Returns `true` when the token may be absent.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        match self {
            Self::Required { .. } => false,
            Self::Optional { .. } | Self::Greedy { .. } => true,
            Self::Choice { required, .. } => !*required,
        }
    }

    /// Returns `true` for a greedy tail.
    #[must_use]
    pub const fn is_greedy(&self) -> bool {
        matches!(self, Self::Greedy { .. })
    }

    /// Returns the accepted options of a choice argument.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Choice { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Returns `true` when `token` is accepted by this spec.
    ///
    /// Non-choice specs accept any token. Choice specs compare
    /// case-insensitively.
    #[must_use]
    pub fn accepts(&self, token: &str) -> bool {
        self.options().is_none_or(|options| {
            let folded = token.to_lowercase();
            options.iter().any(|option| *option == folded)
        })
    }
}

impl fmt::Display for ArgumentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { name } => write!(f, "<{name}>"),
            Self::Optional { name } => write!(f, "[{name}]"),
            Self::Choice {
                options,
                required: true,
                ..
            } => write!(f, "<{}>", options.join("|")),
            Self::Choice {
                options,
                required: false,
                ..
            } => write!(f, "[{}]", options.join("|")),
            Self::Greedy { name } => write!(f, "[{name}...]"),
        }
    }
}

fn fold_options(options: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    options
        .into_iter()
        .map(|option| option.into().to_lowercase())
        .collect()
}

/// Tokens that passed validation, paired with their argument names.
///
/// Absent optional arguments have no entry; a collapsed tail appears as a
/// single value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedArguments {
    names: Vec<String>,
    values: Vec<String>,
}

impl ValidatedArguments {
    /// Pairs validated `values` with the names of `specs`, positionally.
    #[must_use]
    pub fn new(specs: &[ArgumentSpec], values: Vec<String>) -> Self {
        let names = specs
            .iter()
            .take(values.len())
            .map(|spec| spec.name().to_owned())
            .collect();
        Self { names, values }
    }

    /// Looks a value up by argument name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let index = self.names.iter().position(|candidate| candidate == name)?;
        self.values.get(index).map(String::as_str)
    }

    /// Validated values in declaration order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of supplied values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no values were supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

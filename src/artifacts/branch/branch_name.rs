use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::UserError;
use anyhow::Context;

/// A branch name that passed the ref-name validity rules.
///
/// The branch table keys stay plain strings; this type is only the
/// validation gate crossed when a branch is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!(UserError::InvalidBranchName(name.to_string()));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(name) {
            anyhow::bail!(UserError::InvalidBranchName(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("main")]
    #[case("feature-123")]
    #[case("my_branch")]
    #[case("feature/new-feature")]
    fn accepts_valid_names(#[case] name: &str) {
        assert!(BranchName::try_parse(name).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case(".hidden")]
    #[case("bad..name")]
    #[case("locked.lock")]
    #[case("/leading")]
    #[case("trailing/")]
    #[case("with space")]
    #[case("star*name")]
    fn rejects_invalid_names(#[case] name: &str) {
        assert!(BranchName::try_parse(name).is_err());
    }
}

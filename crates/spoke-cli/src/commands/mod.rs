use std::process::ExitCode;

pub mod check;
pub mod dispatch;
pub mod inventory;
pub mod scenarios;
pub mod schema;

/// What a command concluded about the catalog, mapped onto the exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub const fn from_failures(has_failures: bool) -> Self {
        if has_failures { Self::Fail } else { Self::Pass }
    }

    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Pass => ExitCode::SUCCESS,
            Self::Fail => ExitCode::FAILURE,
        }
    }
}

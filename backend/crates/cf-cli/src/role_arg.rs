use cf_core::Role;

use clap::ValueEnum;

/// Command-line spelling of an account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Investor,
    Project,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Investor => Role::Investor,
            RoleArg::Project => Role::Project,
        }
    }
}

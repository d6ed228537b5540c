use crate::role_arg::RoleArg;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and sign it in
    SignUp {
        email: String,
        password: String,
        /// Account type
        #[arg(long, value_enum)]
        role: RoleArg,
    },

    /// Sign in to an existing account
    SignIn {
        email: String,
        password: String,
        /// Account type to sign in as
        #[arg(long, value_enum)]
        role: RoleArg,
    },

    /// List every project listing
    Projects,

    /// Interactive session that lives until `quit`
    Shell,
}

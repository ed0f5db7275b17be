use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and start a session
    Register {
        /// Display name
        #[arg(long)]
        username: String,

        /// Email address (the login credential)
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Omit your identity from submitted reports
        #[arg(long)]
        anonymous: bool,
    },

    /// Log in with email and password
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the currently logged-in user
    Whoami,
}

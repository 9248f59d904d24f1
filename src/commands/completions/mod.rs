use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use crate::config::EXEC_NAME;
use crate::CLI;

#[derive(Debug, Parser)]
#[clap(about = "Generate completion scripts for the specified shell")]
pub struct Options {
    #[clap(name = "shell", help = "The shell to print the completion script for")]
    pub shell: Shell,
}

pub fn handle(options: Options) {
    let mut command = CLI::command();

    generate(options.shell, &mut command, EXEC_NAME, &mut io::stdout().lock());
}

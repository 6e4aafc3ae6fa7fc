pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubehosts")]
#[command(about = "Kubernetes application config helper utility", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    #[arg(long, help = "Print version")]
    pub version: bool,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Output host ips for a given namespace and service")]
    Hosts {
        #[arg(
            short,
            long,
            env = "KUBEHOSTS_NAMESPACE",
            help = "Kubernetes namespace of the application"
        )]
        namespace: String,

        #[arg(
            short,
            long,
            env = "KUBEHOSTS_SERVICE",
            help = "Kubernetes service name of the application"
        )]
        service: String,

        #[arg(
            short,
            long,
            env = "KUBEHOSTS_FORMAT",
            help = "Go template string to use for output formatting"
        )]
        format: Option<String>,

        #[arg(
            short,
            long,
            env = "KUBEHOSTS_TEMPLATE",
            help = "Path to a Go template file to use for output formatting"
        )]
        template: Option<PathBuf>,

        #[arg(
            short,
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            env = "KUBEHOSTS_WAIT",
            help = "How long to wait (in minutes) for --min-hosts; 0 or less reads once"
        )]
        wait: i64,

        #[arg(
            short,
            long,
            default_value_t = 2,
            env = "KUBEHOSTS_MIN_HOSTS",
            help = "Minimum number of hosts to --wait for"
        )]
        min_hosts: usize,
    },
}

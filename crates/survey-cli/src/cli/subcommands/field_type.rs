use clap::Subcommand;

/// Field type commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FieldTypeCommands {
    /// Register a field type.
    Create {
        name: String,
        /// Config schema as a JSON document
        #[arg(long)]
        schema: Option<String>,
    },
    /// List field types.
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
    },
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use jgen_core::config::{self, CONFIG_FILE_NAME, JgenConfig};
use jgen_core::data::ToStringStyle;
use jgen_core::dialog::{
    CommandOutcome, EqualsHashCodeCommand, EqualsHashCodeDialogStrategy, FieldDialog, TextEdit,
    ToStringCommand, ToStringDialogStrategy,
};
use jgen_core::hashcode::InitMultType;
use jgen_core::identifier::{StrategyIdentifier, UserActionIdentifier};
use jgen_core::model::{ElementPosition, JavaClass};
use jgen_core::settings::SettingsStore;
use jgen_core::Engine;

#[derive(Parser)]
#[command(name = "jgen", about = "Java equals/hashCode/toString/compareTo generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate methods for a class
    Generate(GenerateArgs),

    /// List the strategies and method signatures available per action
    Strategies {
        /// Only show this action
        action: Option<UserActionIdentifier>,
    },

    /// Initialize a new jgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Class description (YAML or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// equals-hash-code, to-string, or compare-to
    #[arg(short, long)]
    action: UserActionIdentifier,

    /// commons-lang, commons-lang3, or jdk; defaults to the configured strategy
    #[arg(short, long)]
    strategy: Option<StrategyIdentifier>,

    /// Fields to include, in output order (default: all, in declaration order)
    #[arg(short, long, value_delimiter = ',')]
    fields: Vec<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Insert the methods first in the class body
    #[arg(long, conflicts_with = "after")]
    first: bool,

    /// Insert the methods after this existing method
    #[arg(long)]
    after: Option<String>,

    #[arg(long)]
    append_super: Option<bool>,

    #[arg(long)]
    generate_comment: Option<bool>,

    #[arg(long)]
    use_getters: Option<bool>,

    #[arg(long)]
    use_blocks: Option<bool>,

    /// Compare object fields by reference (equals)
    #[arg(long)]
    compare_references: Option<bool>,

    /// Compare getClass() instead of instanceof (equals)
    #[arg(long)]
    class_comparison: Option<bool>,

    /// How the hashCode seed and multiplier are chosen
    #[arg(long)]
    init_mult: Option<InitMultArg>,

    /// Odd hashCode seed, with --init-mult custom
    #[arg(long)]
    initial: Option<String>,

    /// Odd hashCode multiplier, with --init-mult custom
    #[arg(long)]
    multiplier: Option<String>,

    /// ToStringBuilder style (commons-lang strategies)
    #[arg(long)]
    style: Option<StyleArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum InitMultArg {
    Default,
    Random,
    Custom,
}

impl From<InitMultArg> for InitMultType {
    fn from(arg: InitMultArg) -> Self {
        match arg {
            InitMultArg::Default => InitMultType::Default,
            InitMultArg::Random => InitMultType::Random,
            InitMultArg::Custom => InitMultType::Custom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Default,
    MultiLine,
    NoFieldNames,
    ShortPrefix,
    Simple,
}

impl From<StyleArg> for ToStringStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Default => ToStringStyle::Default,
            StyleArg::MultiLine => ToStringStyle::MultiLine,
            StyleArg::NoFieldNames => ToStringStyle::NoFieldNames,
            StyleArg::ShortPrefix => ToStringStyle::ShortPrefix,
            StyleArg::Simple => ToStringStyle::Simple,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => cmd_generate(args),

        Commands::Strategies { action } => cmd_strategies(action),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "jgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Every strategy this binary ships.
fn build_engine() -> Engine {
    let builder = Engine::builder().standard_skeletons();
    let builder = jgen_commons_lang::register(builder);
    jgen_jdk::register(builder).build()
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<JgenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))
}

fn load_class(path: &Path) -> Result<JavaClass> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let class = match ext {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        _ => serde_yaml_ng::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?,
    };
    Ok(class)
}

/// Apply the common options the user gave; unspecified ones keep their preference.
fn apply_common_options(dialog: &mut FieldDialog<'_>, args: &GenerateArgs) {
    if !args.fields.is_empty() {
        let names: Vec<&str> = args.fields.iter().map(String::as_str).collect();
        dialog.set_checked_fields(&names);
    }
    if args.first {
        dialog.set_element_position(ElementPosition::First);
    } else if let Some(method) = &args.after {
        dialog.set_element_position(ElementPosition::After(method.clone()));
    }
    if let Some(value) = args.append_super {
        dialog.set_append_super(value);
    }
    if let Some(value) = args.generate_comment {
        dialog.set_generate_comment(value);
    }
    if let Some(value) = args.use_getters {
        dialog.set_use_getters_instead_of_fields(value);
    }
    if let Some(value) = args.use_blocks {
        dialog.set_use_block_in_if_statements(value);
    }
}

fn apply_equals_hash_code_options(dialog: &mut FieldDialog<'_>, args: &GenerateArgs) -> Result<()> {
    let mut commands = Vec::new();
    if let Some(value) = args.compare_references {
        commands.push(EqualsHashCodeCommand::SetCompareReferences(value));
    }
    if let Some(value) = args.class_comparison {
        commands.push(EqualsHashCodeCommand::SetClassComparison(value));
    }
    if let Some(init_mult) = args.init_mult {
        commands.push(EqualsHashCodeCommand::SetInitMultType(init_mult.into()));
    }
    if let Some(text) = &args.initial {
        commands.push(EqualsHashCodeCommand::EditInitial(TextEdit::replace_all(text)));
    }
    if let Some(text) = &args.multiplier {
        commands.push(EqualsHashCodeCommand::EditMultiplier(TextEdit::replace_all(text)));
    }

    for command in commands {
        let described = format!("{command:?}");
        match dialog.send::<EqualsHashCodeDialogStrategy>(command)? {
            CommandOutcome::Applied => {}
            CommandOutcome::Vetoed => anyhow::bail!("rejected {described}: not an integer"),
            CommandOutcome::Ignored => {
                log::warn!("ignored {described}; use --init-mult custom to set numbers")
            }
        }
    }
    Ok(())
}

fn apply_to_string_options(dialog: &mut FieldDialog<'_>, args: &GenerateArgs) -> Result<()> {
    let Some(style) = args.style else {
        return Ok(());
    };
    if dialog.strategy::<ToStringDialogStrategy>().is_none() {
        log::warn!("this strategy has no toString styles, ignoring --style");
        return Ok(());
    }
    dialog.send::<ToStringDialogStrategy>(ToStringCommand::SetStyle(style.into()))?;
    Ok(())
}

fn describe_position(position: &ElementPosition) -> String {
    match position {
        ElementPosition::First => "first in the class body".to_string(),
        ElementPosition::Last => "last in the class body".to_string(),
        ElementPosition::After(method) => format!("after {method}()"),
    }
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let class = load_class(&args.input)?;
    let action = args.action;
    let strategy = args.strategy.unwrap_or_else(|| cfg.strategy_for(action));

    let settings_path = PathBuf::from(&cfg.settings_file);
    let mut settings = SettingsStore::load(&settings_path)
        .with_context(|| format!("failed to load settings {}", settings_path.display()))?;

    let mut engine = build_engine();
    let (data, position) = {
        let mut dialog = engine.open_dialog(action, strategy, &class, &mut settings, &cfg.preferences)?;
        dialog.on_ready();
        apply_common_options(&mut dialog, &args);
        match action {
            UserActionIdentifier::EqualsHashCode => apply_equals_hash_code_options(&mut dialog, &args)?,
            UserActionIdentifier::ToString => apply_to_string_options(&mut dialog, &args)?,
            UserActionIdentifier::CompareTo => {}
        }
        if let Some(message) = dialog.error_message() {
            anyhow::bail!("{message}");
        }
        let position = dialog.element_position().clone();
        (dialog.confirm()?, position)
    };

    settings
        .save(&settings_path)
        .with_context(|| format!("failed to write settings {}", settings_path.display()))?;

    let code = engine.generate(action, strategy, &class, data.as_ref())?;
    let source = code.to_source();
    match &args.output {
        Some(path) => {
            fs::write(path, &source)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("  wrote {}", path.display());
        }
        None => print!("{source}"),
    }

    eprintln!(
        "Generated {} method(s) for {} with {strategy}, to insert {}",
        code.methods.len(),
        class.name,
        describe_position(&position)
    );
    Ok(())
}

fn cmd_strategies(action: Option<UserActionIdentifier>) -> Result<()> {
    let engine = build_engine();
    let placeholder = JavaClass::new("T");
    let actions = match action {
        Some(action) => vec![action],
        None => UserActionIdentifier::ALL.to_vec(),
    };

    for action in actions {
        println!("{action}");
        for skeleton in engine.method_skeletons(action) {
            for signature in skeleton.signatures(&placeholder) {
                println!("  {}", signature.declaration());
            }
        }
        let strategies: Vec<String> = engine
            .strategies(action)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  strategies: {}", strategies.join(", "));
    }
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

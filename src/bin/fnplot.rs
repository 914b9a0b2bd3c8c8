use fnplot::api::{
    DocumentBackend, ExportDocument, FunctionForm, HtmlFileBackend, SessionRecord, format_table,
};
use fnplot::core::FunctionRegistry;
use std::path::PathBuf;

const USAGE: &str = "usage: fnplot <list|table|html|png|session> [--function <index>] [--start <x>] [--end <x>] [--slices <n>] [--color <#rrggbb>] [--session <path>] [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    List,
    Table,
    Html,
    Png,
    Session,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    form: FunctionForm,
    output: Option<PathBuf>,
}

fn main() {
    let _ = fnplot::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let registry = FunctionRegistry::standard();

    match args.command {
        CommandKind::List => {
            for (index, label) in registry.labels().iter().enumerate() {
                println!("{index}: {label}");
            }
            Ok(())
        }
        CommandKind::Table => {
            let submission = args.form.submit(&registry).map_err(|err| err.to_string())?;
            println!("{}", submission.description);
            print!("{}", format_table(&submission.series));
            Ok(())
        }
        CommandKind::Html => {
            let output = require_output(&args)?;
            let submission = args.form.submit(&registry).map_err(|err| err.to_string())?;
            let document = ExportDocument::from_series(&submission.series, submission.description);
            HtmlFileBackend
                .write_document(&document, &output)
                .map_err(|err| err.to_string())
        }
        CommandKind::Png => render_png(&args, &registry),
        CommandKind::Session => {
            let output = require_output(&args)?;
            args.form
                .to_session_record()
                .save_to_path(&output)
                .map_err(|err| err.to_string())
        }
    }
}

#[cfg(feature = "cairo-backend")]
fn render_png(args: &CliArgs, registry: &FunctionRegistry) -> Result<(), String> {
    use fnplot::api::{PlotView, PlotViewConfig};
    use fnplot::render::CairoRenderer;

    let output = require_output(args)?;
    let submission = args.form.submit(registry).map_err(|err| err.to_string())?;
    let config = PlotViewConfig::default();
    let renderer = CairoRenderer::new(1, 1).map_err(|err| err.to_string())?;
    let mut view = PlotView::new(renderer, &config).map_err(|err| err.to_string())?;
    view.set_data(submission.series, submission.description)
        .map_err(|err| err.to_string())?;
    if !view.set_line_color(&submission.color) {
        eprintln!("warning: ignoring invalid color `{}`", submission.color);
    }
    view.render().map_err(|err| err.to_string())?;
    view.renderer()
        .write_png(&output)
        .map_err(|err| err.to_string())
}

#[cfg(not(feature = "cairo-backend"))]
fn render_png(_args: &CliArgs, _registry: &FunctionRegistry) -> Result<(), String> {
    Err("png output requires the `cairo-backend` feature".to_owned())
}

fn require_output(args: &CliArgs) -> Result<PathBuf, String> {
    args.output
        .clone()
        .ok_or_else(|| "missing --output <path>".to_owned())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("list") => CommandKind::List,
        Some("table") => CommandKind::Table,
        Some("html") => CommandKind::Html,
        Some("png") => CommandKind::Png,
        Some("session") => CommandKind::Session,
        _ => return Err(USAGE.to_owned()),
    };

    let mut form = FunctionForm::default();
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--function" => {
                let raw = value("--function")?;
                let index = raw
                    .parse::<usize>()
                    .map_err(|_| format!("invalid function index `{raw}`"))?;
                form.selection = Some(index);
            }
            "--start" => form.start = value("--start")?,
            "--end" => form.end = value("--end")?,
            "--slices" => form.slices = value("--slices")?,
            "--color" => form.color = value("--color")?,
            "--session" => {
                let path = PathBuf::from(value("--session")?);
                let record = SessionRecord::load_from_path(&path).map_err(|err| err.to_string())?;
                form = FunctionForm::from_session_record(&record);
            }
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        command,
        form,
        output,
    })
}

/// # palette: Showing All Styles
///
/// This example prints every style by name, formatted with the terminal's
/// style set. When piping the output, e.g., into `cat`, the names appear
/// without escape sequences. Pass `--less` to apply the `LESS_TERMCAP_*`
/// overrides first.
use prettyterm::opt::Options;
use prettyterm::{Style, Terminal};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let less = std::env::args().any(|arg| arg == "--less");
    let term = Terminal::with_options(
        Options::builder()
            .emphasis_from_env(less)
            .query_window_size(true)
            .build(),
    );

    let styles = term.styles();
    let size = term.window_size();
    println!(
        "interactive={} styles={} rows={} cols={}\n",
        term.is_interactive(),
        styles.is_enabled(),
        size.rows,
        size.cols
    );

    for (index, style) in Style::ALL.iter().enumerate() {
        print!("{}", styles.paint(*style, format!("{:<12}", style.name())));
        if index % 6 == 5 {
            println!();
        }
    }
    println!();
}

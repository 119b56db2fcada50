use template_cli::cli::App;

fn main() {
    let app = App::default();
    let status = app.run(std::env::args_os());

    std::process::exit(status);
}

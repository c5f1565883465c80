use clap::Parser;
use mandelbrot_renderer::cli::args::{CommandsEnum, MandelbrotRendererArgs, RenderArgs};
use mandelbrot_renderer::cli::color_swatch::generate_color_swatch;
use mandelbrot_renderer::cli::render::render_fractal;
use mandelbrot_renderer::core::error::RenderResult;

fn run(args: &MandelbrotRendererArgs) -> RenderResult<()> {
    match &args.command {
        Some(CommandsEnum::Render(render_args)) => render_fractal(render_args).map(|_| ()),
        Some(CommandsEnum::ColorSwatch(params)) => generate_color_swatch(params),
        None => render_fractal(&RenderArgs::default()).map(|_| ()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = MandelbrotRendererArgs::parse();
    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

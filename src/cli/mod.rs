//! CLI dispatch.

pub mod args;
pub mod output;

use crate::appicon::{self, AppIconOptions};
use crate::config::BrandConfig;
use crate::favicon::{self, FaviconOptions};
use crate::hero::{self, HeroOptions};
use crate::og::{self, OgOptions};
use crate::{encode, mark, source, svg, text};
use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use output::{print_info, print_success, print_warning};
use tracing_subscriber::EnvFilter;

/// Parse arguments and run the selected generator.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = BrandConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Favicon {
            auto_crop,
            optimize,
        } => {
            print_info(&format!("Generating favicon set from {}", cli.logo.display()));
            let report = favicon::generate(
                &cli.logo,
                &cli.out,
                FaviconOptions {
                    auto_crop,
                    optimize,
                },
            )?;
            if let Some(crop) = report.crop {
                if crop.fallback {
                    print_warning("no neon region found; used centered-square crop");
                }
            }
            print_success(&format!("Wrote {} favicon files", report.written.len()));
        }

        Commands::Icons {
            auto_crop,
            optimize,
        } => {
            print_info(&format!("Generating app icons from {}", cli.logo.display()));
            let written = appicon::generate(
                &cli.logo,
                &cli.out,
                &config,
                AppIconOptions {
                    auto_crop,
                    optimize,
                },
            )?;
            print_success(&format!("Wrote {} app icon files", written.len()));
        }

        Commands::Og {
            title,
            subtitle,
            font,
            optimize,
        } => {
            if let Some(title) = title {
                config.og.title = title;
            }
            if let Some(subtitle) = subtitle {
                config.og.subtitle = subtitle;
            }
            let font = text::resolve_font(font.as_deref())?;
            print_info("Generating Open Graph cards");
            let written =
                og::generate_all(&cli.logo, &cli.out, &config, &font, OgOptions { optimize })?;
            print_success(&format!("Wrote {} OG cards", written.len()));
        }

        Commands::Hero { webp } => {
            print_info("Generating hero backgrounds");
            let written = hero::generate(&cli.out, &config.hero, HeroOptions { webp })?;
            print_success(&format!("Wrote {} hero backgrounds", written.len()));
        }

        Commands::Mark { pad, size, output } => {
            let master = source::load_master(&cli.logo)?;
            let (mut cropped, report) = mark::auto_crop_mark(&master, pad)?;
            if report.fallback {
                print_warning(&format!(
                    "only {} neon pixels found; used centered-square crop",
                    report.neon_pixels
                ));
            }
            if let Some(edge) = size {
                cropped = source::resize_square(&cropped, edge);
            }
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            encode::save_png(&cropped, &output, false)?;
            let (x, y, w, h) = report.rect;
            print_success(&format!(
                "Cropped {}x{} at ({}, {}) -> {}",
                w,
                h,
                x,
                y,
                output.display()
            ));
        }

        Commands::Svg { edge, output } => {
            svg::write_logo_svg(&cli.logo, &output, edge)?;
            print_success(&format!("Wrote {}", output.display()));
        }

        Commands::All {
            auto_crop,
            optimize,
            webp,
            font,
        } => {
            print_info(&format!(
                "Generating all brand assets into {}",
                cli.out.display()
            ));

            let report = favicon::generate(
                &cli.logo,
                &cli.out,
                FaviconOptions {
                    auto_crop,
                    optimize,
                },
            )?;
            let mut total = report.written.len();

            total += appicon::generate(
                &cli.logo,
                &cli.out,
                &config,
                AppIconOptions {
                    auto_crop,
                    optimize,
                },
            )?
            .len();

            total += hero::generate(&cli.out, &config.hero, HeroOptions { webp })?.len();

            // OG needs a font; everything else above does not. A fontless
            // machine still gets the rest of the set.
            match text::resolve_font(font.as_deref()) {
                Ok(font) => {
                    total +=
                        og::generate_all(&cli.logo, &cli.out, &config, &font, OgOptions { optimize })?
                            .len();
                }
                Err(e) => print_warning(&format!("skipping OG cards: {e}")),
            }

            svg::write_logo_svg(&cli.logo, &cli.out.join("logo.svg"), svg::DEFAULT_EDGE)?;
            total += 1;

            print_success(&format!("Wrote {} asset files", total));
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

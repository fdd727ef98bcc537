use anyhow::{Context, Result};
use clap::Parser;
use photo_insight::analyzer::MockAnalyzer;
use photo_insight::controller::PageController;
use photo_insight::error::PhotoInsightError;
use photo_insight::{cli, config, logging, picker, render};
use photo_insight_common::{MockAnalysis, Phase};
use cli::{Cli, Commands};
use config::Config;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, warnings) = Config::load_with_warnings().context("設定の読み込みに失敗")?;
    logging::init(&config.log_filter, cli.verbose);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match cli.command {
        Commands::Analyze { photo, delay_ms, fail, remove_after_ms, json } => {
            let mock = MockAnalysis {
                delay_ms: delay_ms.unwrap_or(config.analysis_delay_ms),
                fail: fail || config.simulate_failure,
            };

            let selected = picker::load_image(&photo)
                .with_context(|| format!("写真を選択できません: {}", photo.display()))?;
            let file_name = selected.name.clone();
            println!("📷 {}", render::render_photo(&selected));

            let mut controller = PageController::new(MockAnalyzer::new(mock));
            controller.select_photo(selected);
            if !controller.analyze() {
                return Err(PhotoInsightError::NoPhotoSelected.into());
            }

            let spinner = (!json).then(|| render::analyzing_spinner(&file_name));
            let phase = match remove_after_ms {
                Some(ms) => {
                    let waited = tokio::time::timeout(
                        Duration::from_millis(ms),
                        controller.wait_for_completion(),
                    )
                    .await;
                    match waited {
                        Ok(phase) => phase,
                        Err(_) => {
                            controller.remove_photo();
                            controller.phase()
                        }
                    }
                }
                None => controller.wait_for_completion().await,
            };
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            if json {
                let report = render::analysis_report(controller.state());
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if phase == Phase::Idle {
                println!("写真が削除されたため解析を中止しました");
            } else {
                print!("{}", render::render_results(&controller.results_view()));
            }

            if phase == Phase::Failed {
                std::process::exit(1);
            }
        }

        Commands::Inspect { paths } => {
            match picker::pick_dropped(&paths)? {
                Some(photo) => println!("✔ 選択: {}", render::render_photo(&photo)),
                None => println!("- 画像ではないため無視されます"),
            }
            if paths.len() > 1 {
                println!("  (先頭以外の {} 件は対象外)", paths.len() - 1);
            }
        }

        Commands::Landing => {
            print!("{}", render::render_landing());
        }

        Commands::Config { set_delay_ms, set_simulate_failure, show } => {
            let mut config = config;

            if let Some(ms) = set_delay_ms {
                config.set_analysis_delay_ms(ms)?;
                println!("✔ 解析の待ち時間を {}ms に設定しました", ms);
            }

            if let Some(fail) = set_simulate_failure {
                config.set_simulate_failure(fail)?;
                println!("✔ 失敗シミュレーションを {} に設定しました", fail);
            }

            if show {
                println!("設定:");
                println!("  待ち時間: {}ms", config.analysis_delay_ms);
                println!("  失敗シミュレーション: {}", config.simulate_failure);
                println!("  ログ: {}", config.log_filter);
                if let Ok(path) = Config::config_path() {
                    println!("  ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

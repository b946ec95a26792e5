use leptos::{either::Either, prelude::*};
use serde::Serialize;

use crate::content::{Background, LiquidEtherConfig, PixelBlastConfig};

// The stylesheet animates both surfaces from the CSS variables. The full
// config is also exposed as `data-config` JSON for a script-driven effect.

fn config_json<T: Serialize>(config: &T) -> String {
    serde_json::to_string(config).unwrap_or_default()
}

fn liquid_ether_style(config: &LiquidEtherConfig) -> String {
    let colors = config
        .colors
        .iter()
        .enumerate()
        .map(|(i, c)| format!("--ether-color-{i}: {c};"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{colors} --ether-speed: {}; --ether-intensity: {};",
        config.auto_speed, config.auto_intensity
    )
}

fn pixel_blast_style(config: &PixelBlastConfig) -> String {
    format!(
        "--blast-color: {}; --blast-pixel-size: {}px; --blast-speed: {}; --blast-edge-fade: {};",
        config.color, config.pixel_size, config.speed, config.edge_fade
    )
}

#[component]
pub fn LiquidEther(config: &'static LiquidEtherConfig) -> impl IntoView {
    view! {
        <div
            class="liquid-ether absolute inset-0"
            style=liquid_ether_style(config)
            data-config=config_json(config)
            aria-hidden="true"
        >
            <canvas class="w-full h-full"></canvas>
        </div>
    }
}

#[component]
pub fn PixelBlast(config: &'static PixelBlastConfig) -> impl IntoView {
    view! {
        <div
            class=if config.transparent {
                "pixel-blast pixel-blast-transparent absolute inset-0"
            } else {
                "pixel-blast absolute inset-0"
            }
            style=pixel_blast_style(config)
            data-config=config_json(config)
            aria-hidden="true"
        >
            <canvas class="w-full h-full"></canvas>
        </div>
    }
}

#[component]
pub fn HeroBackground(background: &'static Background) -> impl IntoView {
    match background {
        Background::LiquidEther(config) => Either::Left(view! { <LiquidEther config /> }),
        Background::PixelBlast(config) => Either::Right(view! { <PixelBlast config /> }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liquid_ether_style_lists_colors() {
        let style = liquid_ether_style(&LiquidEtherConfig::default());
        assert!(style.starts_with("--ether-color-0: #5227FF; --ether-color-1: #FF9FFC;"));
        assert!(style.contains("--ether-color-2: #B19EEF;"));
        assert!(style.contains("--ether-speed: 0.5;"));
        assert!(style.contains("--ether-intensity: 1.5;"));
    }

    #[test]
    fn test_liquid_ether_style_single_color() {
        let config = LiquidEtherConfig {
            colors: vec!["#000000".to_string()],
            ..LiquidEtherConfig::default()
        };
        assert_eq!(
            liquid_ether_style(&config),
            "--ether-color-0: #000000; --ether-speed: 0.5; --ether-intensity: 1.5;"
        );
    }

    #[test]
    fn test_pixel_blast_style() {
        let style = pixel_blast_style(&PixelBlastConfig::default());
        assert!(style.contains("--blast-pixel-size: 4px;"));
    }

    #[test]
    fn test_config_json_round_trips_field_names() {
        let json = config_json(&LiquidEtherConfig::default());
        assert!(json.contains("\"auto_resume_delay\":3000"));
        assert!(json.contains("\"iterations_poisson\":16"));
    }
}

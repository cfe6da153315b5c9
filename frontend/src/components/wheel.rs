use shared::constants::SPIN_TRANSITION_MS;
use shared::wheel_geometry::{polar_point, WheelGeometry};
use shared::Catalog;
use yew::prelude::*;

const SIZE: f64 = 600.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = CENTER - 80.0;
const MARKER_COUNT: usize = 48;
const GOLD_TEXT: &str = "#f3e29f";

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    pub catalog: Catalog,
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    let geometry = WheelGeometry::new(props.catalog.len());

    let segments = props.catalog.iter().enumerate().map(|(index, prize)| {
        let path = geometry.segment_path(index, CENTER, RADIUS);
        let is_top = prize.is_top_prize();
        let fill = if is_top {
            "url(#midnightLuxuryGold)"
        } else if index % 2 == 0 {
            "url(#carbonDark)"
        } else {
            "url(#carbonDeep)"
        };
        let (stroke, stroke_width) = if is_top {
            ("#4d3d1a", "2")
        } else {
            ("rgba(207,162,77,0.15)", "0.5")
        };
        let label_transform = format!(
            "rotate({}, {}, {})",
            geometry.segment_center(index),
            CENTER,
            CENTER
        );

        html! {
            <g key={prize.id}>
                <path d={path.clone()} fill={fill} stroke={stroke} stroke-width={stroke_width} />
                if is_top {
                    <path d={path} fill="none" stroke="rgba(0,0,0,0.7)" stroke-width="5" style="filter: blur(5px)" />
                }
                <g transform={label_transform}>
                    <text
                        x={CENTER.to_string()}
                        y={(CENTER - RADIUS * 0.7).to_string()}
                        fill={GOLD_TEXT}
                        class="font-bodoni font-bold italic"
                        text-anchor="middle"
                        style="font-size: 32px; filter: drop-shadow(0px 3px 6px rgba(0,0,0,1)); letter-spacing: -0.5px"
                    >
                        { prize.label.clone() }
                    </text>
                </g>
            </g>
        }
    });

    let markers = (0..MARKER_COUNT).map(|i| {
        let angle = (i * 360) as f64 / MARKER_COUNT as f64;
        let (x, y) = polar_point(CENTER, RADIUS + 28.0, angle);
        let is_major = i % 4 == 0;
        let (r, fill) = if is_major { ("2.5", GOLD_TEXT) } else { ("1", "#8a6d3b") };

        html! {
            <circle key={i} cx={x.to_string()} cy={y.to_string()} r={r} fill={fill} />
        }
    });

    // Only animate while a spin is running; otherwise jump straight to the angle.
    let transform_style = if props.is_spinning {
        format!(
            "transform: rotate({}deg); transition: transform {}ms cubic-bezier(0.1, 0, 0, 1)",
            props.rotation, SPIN_TRANSITION_MS
        )
    } else {
        format!("transform: rotate({}deg); transition: none", props.rotation)
    };

    let ring = |offset: f64, fill: &'static str| html! {
        <circle cx={CENTER.to_string()} cy={CENTER.to_string()} r={(RADIUS + offset).to_string()} fill={fill} />
    };

    html! {
        <div class="relative w-full h-full flex items-center justify-center overflow-visible">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 -translate-y-[15%] z-50 scale-[0.7] sm:scale-[0.85]">
                <svg width="70" height="90" viewBox="0 0 70 90">
                    <defs>
                        <linearGradient id="pointerGold" x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color="#ffffff" />
                            <stop offset="25%" stop-color="#f3e29f" />
                            <stop offset="75%" stop-color="#8a6d3b" />
                            <stop offset="100%" stop-color="#cfa24d" />
                        </linearGradient>
                    </defs>
                    <path d="M35 90 L10 25 A 25 25 0 1 1 60 25 Z" fill="url(#pointerGold)" stroke="#000" stroke-width="1" />
                    <circle cx="35" cy="25" r="10" fill="#050505" />
                    <circle cx="35" cy="25" r="4" fill={GOLD_TEXT} class="animate-pulse" />
                </svg>
            </div>

            <div class="relative w-full h-full">
                <svg
                    viewBox={format!("0 0 {} {}", SIZE, SIZE)}
                    class="w-full h-full relative z-20"
                    style={transform_style}
                >
                    <defs>
                        <linearGradient id="goldBezel3D" x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color="#4a360a" />
                            <stop offset="30%" stop-color="#fff" />
                            <stop offset="60%" stop-color="#8a6d3b" />
                            <stop offset="100%" stop-color="#4a360a" />
                        </linearGradient>
                        <linearGradient id="midnightLuxuryGold" x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color="#0a0a0a" />
                            <stop offset="50%" stop-color="#4a3d1c" />
                            <stop offset="100%" stop-color="#050505" />
                        </linearGradient>
                        <linearGradient id="carbonDark" x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color="#0d0d0d" />
                            <stop offset="100%" stop-color="#050505" />
                        </linearGradient>
                        <linearGradient id="carbonDeep" x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color="#121212" />
                            <stop offset="100%" stop-color="#080808" />
                        </linearGradient>
                        <radialGradient id="deepHub" cx="50%" cy="50%" r="50%">
                            <stop offset="0%" stop-color="#555" />
                            <stop offset="70%" stop-color="#000" />
                            <stop offset="100%" stop-color="#111" />
                        </radialGradient>
                    </defs>

                    { ring(55.0, "url(#goldBezel3D)") }
                    { ring(50.0, "#000") }
                    { ring(47.0, "url(#goldBezel3D)") }
                    { ring(40.0, "#050505") }
                    { ring(0.0, "#000") }

                    { for segments }
                    { for markers }

                    <circle cx={CENTER.to_string()} cy={CENTER.to_string()} r="75" fill="url(#goldBezel3D)" />
                    <circle cx={CENTER.to_string()} cy={CENTER.to_string()} r="70" fill="#000" />
                    <circle cx={CENTER.to_string()} cy={CENTER.to_string()} r="65" fill="url(#deepHub)" />
                    <text
                        x={CENTER.to_string()}
                        y={(CENTER + 6.0).to_string()}
                        fill={GOLD_TEXT}
                        class="font-montserrat font-bold tracking-[0.5em]"
                        text-anchor="middle"
                        style="font-size: 10px; text-transform: uppercase"
                    >
                        { "ARMANI" }
                    </text>
                </svg>
            </div>
        </div>
    }
}

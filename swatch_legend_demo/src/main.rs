// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend demos for `swatch_legend`.
//!
//! Writes `swatch_legend_demo.html` with one SVG per legend. Set `RUST_LOG=debug` to see the
//! layout decisions.

mod svg;

use peniko::color::palette::css;
use swatch_legend::{
    LegendOptions, LinearColorScale, OrdinalColorScale, QuantileColorScale, render_legend,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut doc = svg::SvgDocument::default();

    doc.add("fruit", 100.0, 40.0);
    let fruit = OrdinalColorScale::new(
        ["Apples", "Pears", "Plums"],
        [css::RED, css::GREEN, css::PURPLE],
    );
    render_legend(&mut doc, "#fruit", &fruit, "ordinal", &LegendOptions::new())?;

    doc.add("temperature", 240.0, 50.0);
    let temperature = LinearColorScale::new([0.0, 100.0], [css::LIGHT_YELLOW, css::DARK_RED]);
    render_legend(
        &mut doc,
        "#temperature",
        &temperature,
        "linear",
        &LegendOptions::new()
            .with_linear_boxes(4)
            .with_title("Temperature"),
    )?;

    doc.add("income", 300.0, 60.0);
    let income = QuantileColorScale::new(
        [12.0, 18.0, 25.0, 31.0, 40.0, 52.0, 67.0, 88.0, 120.0],
        [css::ALICE_BLUE, css::LIGHT_BLUE, css::STEEL_BLUE, css::NAVY],
    );
    render_legend(
        &mut doc,
        "income",
        &income,
        "quantile",
        &LegendOptions::new().with_fill(true).with_title("Income (k)"),
    )?;

    doc.add("crowded", 120.0, 30.0);
    let crowded = OrdinalColorScale::new(
        ["a", "b", "c", "d", "e", "f", "g", "h"],
        [
            css::RED,
            css::ORANGE,
            css::GOLD,
            css::GREEN,
            css::TEAL,
            css::BLUE,
            css::INDIGO,
            css::VIOLET,
        ],
    );
    render_legend(&mut doc, "#crowded", &crowded, "ordinal", &LegendOptions::new())?;

    if let Err(err) = render_legend(&mut doc, "#fruit", &fruit, "log", &LegendOptions::new()) {
        log::warn!("skipped legend: {err}");
    }

    let sections = doc.render();
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>swatch_legend demo</title></head>\n<body>\n",
    );
    for (id, svg) in &sections {
        html.push_str(&format!("<h2>{id}</h2>\n{svg}"));
    }
    html.push_str("</body>\n</html>\n");

    std::fs::write("swatch_legend_demo.html", html)?;
    log::info!("wrote {} legends", sections.len());
    println!("wrote swatch_legend_demo.html");
    Ok(())
}

use serde_json::json;
use shades::build::{JsonExport, ShadePipeline, TokenTree};
use tracing_subscriber::{layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

pub fn main() -> anyhow::Result<()> {
    registry()
        .with(
            HierarchicalLayer::default()
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_indent_lines(true)
                .with_indent_amount(4),
        )
        .with(EnvFilter::from_default_env())
        .init();

    let tree = TokenTree::from_value(json!({
        "color": {
            "base": {
                "gray": {
                    "light": { "value": "#cccccc" },
                    "medium": { "value": "#999999" },
                    "dark": { "value": "#111111" },
                },
                "red": { "value": "#ff0000" },
                "green": { "value": "#00ff00" },
            },
            "background": {
                "page": {
                    "primary": { "value": "hsl(262, 100%, 68%)", "comment": "brand color" },
                    "secondary": { "value": "hsl(180, 60%, 30%)" },
                },
            },
        },
        "size": {
            "font": {
                "small": { "value": "0.75" },
                "base": { "value": "1" },
            },
        },
    }))?;

    let stdout = std::io::stdout().lock();
    ShadePipeline::default().run(tree, JsonExport::new(stdout))?;

    Ok(())
}

use pretty_assertions::assert_eq;
use serde_json::json;
use shades_build::{JsonExport, NameCase, Recorder, ShadePipeline, SlotPath, TokenTree};
use shades_core::{ExpandOptions, Offset};

fn design_tokens() -> TokenTree {
    TokenTree::from_json_str(
        r##"{
            "color": {
                "base": {
                    "gray": {
                        "light": { "value": "#cccccc" },
                        "dark": { "value": "#111111" }
                    },
                    "red": { "value": "#ff0000" }
                },
                "font": {
                    "base": { "value": "{color.base.red.value}" }
                },
                "background": {
                    "page": {
                        "primary": { "value": "hsl(262, 100%, 68%)", "comment": "brand" }
                    }
                }
            },
            "size": {
                "font": {
                    "base": { "value": 16 }
                }
            }
        }"##,
    )
    .unwrap()
}

#[test]
fn untouched_groups_survive() {
    let mut recorder = Recorder::new(NameCase::Camel);
    ShadePipeline::default()
        .run(design_tokens(), &mut recorder)
        .unwrap();

    let tokens = recorder.tokens();
    assert_eq!(tokens["colorBaseGrayLight"], json!("#cccccc"));
    assert_eq!(tokens["colorBaseGrayDark"], json!("#111111"));
    assert_eq!(tokens["colorFontBase"], json!("{color.base.red.value}"));
    assert_eq!(tokens["sizeFontBase"], json!(16));
    assert!(!tokens.contains_key("colorBackgroundPagePrimary"));

    let shades = tokens
        .keys()
        .filter(|v| v.starts_with("colorBackgroundPage"))
        .cloned()
        .collect::<Vec<_>>();

    assert_eq!(
        shades,
        [
            "colorBackgroundPagePrimary70",
            "colorBackgroundPagePrimary80",
            "colorBackgroundPagePrimary90",
            "colorBackgroundPagePrimary100",
            "colorBackgroundPagePrimary60",
            "colorBackgroundPagePrimary50",
            "colorBackgroundPagePrimary40",
            "colorBackgroundPagePrimary30",
            "colorBackgroundPagePrimary20",
            "colorBackgroundPagePrimary10",
        ]
    );
}

#[test]
fn expand_other_slot() {
    let pipeline = ShadePipeline::new(
        "color.base.gray".parse().unwrap(),
        ExpandOptions::default().with_offset(Offset::new(0.2).unwrap()),
    );

    let mut tree = design_tokens();
    let count = pipeline.apply(&mut tree).unwrap();

    let gray = tree.slot(&"color.base.gray".parse().unwrap()).unwrap();
    assert_eq!(count, gray.len());
    assert_eq!(
        gray.keys().map(String::as_str).collect::<Vec<_>>(),
        [
            "light-80", "light-60", "light-40", "light-20", "dark-20", "dark-40", "dark-60",
            "dark-80", "dark-100",
        ]
    );
    assert_eq!(gray["light-80"]["value"], json!("hsl(0, 0%, 80%)"));
    assert_eq!(gray["dark-80"]["value"], json!("hsl(0, 0%, 67%)"));

    let page = tree.properties_at(&SlotPath::default()).unwrap();
    assert_eq!(page["primary"].value, "hsl(262, 100%, 68%)");
}

#[test]
fn export_round_trips() {
    let mut out = Vec::new();
    let tree = ShadePipeline::default()
        .run(design_tokens(), JsonExport::new(&mut out))
        .unwrap();

    let written = TokenTree::from_json_str(std::str::from_utf8(&out).unwrap()).unwrap();
    assert_eq!(written, tree);
    assert_eq!(
        written.into_value()["color"]["background"]["page"]["primary-90"],
        json!({ "value": "hsl(262, 100%, 88%)", "comment": "brand" })
    );
}

#[test]
fn broken_tokens_fail_without_output() {
    let mut tree = design_tokens().into_value();
    tree["color"]["background"]["page"]["accent"] = json!({ "value": "not-a-color" });

    let mut out = Vec::new();
    let err = ShadePipeline::default()
        .run(TokenTree::from_value(tree).unwrap(), JsonExport::new(&mut out))
        .unwrap_err();

    assert!(format!("{err:#}").contains("accent"), "{err:#}");
    assert!(out.is_empty());
}

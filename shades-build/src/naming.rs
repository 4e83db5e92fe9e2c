use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Casing used when joining a token path into a single name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCase {
    /// `colorBackgroundPagePrimary70`
    #[default]
    Camel,
    /// `ColorBackgroundPagePrimary70`
    Pascal,
    /// `color-background-page-primary-70`
    Kebab,
    /// `color_background_page_primary_70`
    Snake,
    /// `COLOR_BACKGROUND_PAGE_PRIMARY_70`
    ShoutySnake,
}

pub fn token_name(path: &[impl AsRef<str>], case: NameCase) -> String {
    let joined = path.iter().map(|v| v.as_ref()).join(" ");

    match case {
        NameCase::Camel => joined.to_lower_camel_case(),
        NameCase::Pascal => joined.to_upper_camel_case(),
        NameCase::Kebab => joined.to_kebab_case(),
        NameCase::Snake => joined.to_snake_case(),
        NameCase::ShoutySnake => joined.to_shouty_snake_case(),
    }
}

//! Text rewrites that adapt a page to living one directory below the site root.
//!
//! These are literal substitutions on the raw text, not HTML edits: markup
//! that doesn't match a pattern byte for byte passes through untouched.

use crate::domain::switcher::INDEX_PAGE;
use crate::utils::error::Result;
use regex::{NoExpand, Regex};

const ASSET_PREFIXES: &[(&str, &str)] = &[
    (r#"src="images/"#, r#"src="../images/"#),
    (r#"href="images/"#, r#"href="../images/"#),
];

#[derive(Debug, Clone)]
pub struct RewriteRules {
    main_page_link: Regex,
    index_link: String,
    source_lang_attr: String,
}

impl RewriteRules {
    pub fn new(main_page: &str, source_language: &str) -> Result<Self> {
        let main_page_link = Regex::new(&format!(r#"href="\./{}"#, regex::escape(main_page)))?;

        Ok(Self {
            main_page_link,
            index_link: format!(r#"href="./{}"#, INDEX_PAGE),
            source_lang_attr: html_lang_attr(source_language),
        })
    }

    /// Applies the rules in order: asset prefixes, main page links, then
    /// the root `lang` attribute.
    pub fn apply(&self, content: &str, language_code: &str) -> String {
        let mut text = content.to_string();

        for &(from, to) in ASSET_PREFIXES {
            text = text.replace(from, to);
        }

        text = self
            .main_page_link
            .replace_all(&text, NoExpand(&self.index_link))
            .into_owned();

        text.replace(&self.source_lang_attr, &html_lang_attr(language_code))
    }
}

fn html_lang_attr(code: &str) -> String {
    format!(r#"<html lang="{}">"#, code)
}

/// Output file name for a tracked file: the main page becomes the
/// directory index, everything else keeps its name.
pub fn destination_name<'a>(source: &'a str, main_page: &str) -> &'a str {
    if source == main_page {
        INDEX_PAGE
    } else {
        source
    }
}

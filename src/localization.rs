use anyhow::Result;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::collections::HashMap;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Languages with a translation bundle
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "ar", "fr"];

const FALLBACK_LANGUAGE: &str = "en";

fn resource_for(language: &str) -> Option<&'static str> {
    match language {
        "en" => Some(include_str!("../locales/en/main.ftl")),
        "ar" => Some(include_str!("../locales/ar/main.ftl")),
        "fr" => Some(include_str!("../locales/fr/main.ftl")),
        _ => None,
    }
}

/// Localization manager for the bot replies
pub struct LocalizationManager {
    bundles: HashMap<String, Arc<FluentBundle<FluentResource>>>,
    default_language: String,
}

impl LocalizationManager {
    /// Create a manager with every supported language loaded and English as
    /// the fallback
    pub fn new() -> Result<Self> {
        Self::with_default_language(FALLBACK_LANGUAGE)
    }

    /// Create a manager that falls back to `default_language` when the user's
    /// language is not supported
    pub fn with_default_language(default_language: &str) -> Result<Self> {
        let mut bundles = HashMap::new();

        for language in SUPPORTED_LANGUAGES {
            let locale: LanguageIdentifier = language.parse()?;
            let bundle = Self::create_bundle(&locale)?;
            bundles.insert(language.to_string(), Arc::new(bundle));
        }

        if !bundles.contains_key(default_language) {
            anyhow::bail!("No translations for default language {default_language:?}");
        }

        Ok(Self {
            bundles,
            default_language: default_language.to_string(),
        })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(locale: &LanguageIdentifier) -> Result<FluentBundle<FluentResource>> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Messages are sent as Telegram HTML; bidi isolation marks would show up in them
        bundle.set_use_isolating(false);

        let language = locale.language.as_str();
        let content = resource_for(language)
            .ok_or_else(|| anyhow::anyhow!("No resource file for locale {locale}"))?;
        let resource = FluentResource::try_new(content.to_string())
            .map_err(|(_, errors)| anyhow::anyhow!("Invalid resource for {locale}: {errors:?}"))?;
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow::anyhow!("Conflicting messages for {locale}: {errors:?}"))?;

        Ok(bundle)
    }

    /// Pick the reply language for a Telegram `language_code` such as
    /// `"ar"`, `"fr-CA"` or `"en-US"`
    pub fn resolve_language(&self, language_code: Option<&str>) -> &str {
        language_code
            .and_then(|code| code.split(['-', '_']).next())
            .map(str::to_lowercase)
            .and_then(|prefix| {
                SUPPORTED_LANGUAGES
                    .iter()
                    .find(|supported| **supported == prefix)
                    .copied()
            })
            .unwrap_or(self.default_language.as_str())
    }

    /// Get a localized message in a specific language
    pub fn get_message_in_language(&self, key: &str, language: &str) -> String {
        let bundle = match self
            .bundles
            .get(language)
            .or_else(|| self.bundles.get(&self.default_language))
        {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {}", key),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let mut errors = vec![];
        bundle.format_pattern(pattern, None, &mut errors).into_owned()
    }

    /// Get a localized message for a Telegram user's `language_code`
    pub fn t_lang(&self, key: &str, language_code: Option<&str>) -> String {
        let language = self.resolve_language(language_code);
        self.get_message_in_language(key, language)
    }
}

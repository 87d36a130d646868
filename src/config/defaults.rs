use crate::providers::ProviderSpec;

/// 內建的 provider 清單（未指定 `--providers` 時使用）
///
/// "AMLI Arc" 出現兩次是既有設定，保留原樣不去重。
pub fn default_providers() -> Vec<ProviderSpec> {
    let mut providers = Vec::new();

    providers.extend([
        ProviderSpec::amli("AMLI Arc", "XK-A2xAAAB8A_JrR", "89240"),
        ProviderSpec::amli("AMLI Arc", "XK-A2xAAAB8A_JrR", "89240"),
        ProviderSpec::amli("AMLI Wallingford", "XK-AAxAAACEA_JcG", "89178"),
        ProviderSpec::amli("AMLI Mark24", "XHSPIxIAACIAbhlr", "88786"),
        ProviderSpec::amli("AMLI 535", "XFJHfhMAACIANSgJ", "88146"),
        ProviderSpec::amli("AMLI SLU", "XHSQBhIAAB8Abh1Y", "88848"),
        ProviderSpec::amli("AMLI Bellevue Spring District", "XMxVmCwAADkA1DMw", "89407"),
        ProviderSpec::amli("AMLI Bellevue Park", "XFJHVxMAACQANSdY", "85263"),
    ]);

    providers.extend([
        ProviderSpec::holland("Ivey on Boren", "Hiz4GtgjzZhE2rL4y"),
        ProviderSpec::holland("Kiara", "v2MCbAhp2qPsB2GZg"),
        ProviderSpec::holland("Dimension", "Gi8N4BuzsdrPYjmWL"),
        ProviderSpec::holland("The Huxley", "mCpv7WScnT9XoYMLd"),
        ProviderSpec::holland("One Lakefront", "aJRHh8cQ6cbHnq5JH"),
        ProviderSpec::holland("JUXT", "RRfBiZh3PfLMjnwPA"),
    ]);

    providers.extend([
        ProviderSpec::sightmap("REN", "https://sightmap.com/app/api/v1/l8xvrjnmpjk/sightmaps/13986"),
        ProviderSpec::sightmap("McKenzie", "https://sightmap.com/app/api/v1/6m9pzykzvk1/sightmaps/1106"),
        ProviderSpec::sightmap("888 Bellevue", "https://sightmap.com/app/api/v1/dzlporo4pg4/sightmaps/5526"),
        ProviderSpec::sightmap("Broadstone Sky", "https://sightmap.com/app/api/v1/9zw467jlp87/sightmaps/23139"),
    ]);

    providers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_default_providers_by_kind() {
        let providers = default_providers();
        assert_eq!(providers.len(), 18);
        assert_eq!(providers.iter().filter(|p| p.kind() == "amli").count(), 8);
        assert_eq!(providers.iter().filter(|p| p.kind() == "holland").count(), 6);
        assert_eq!(providers.iter().filter(|p| p.kind() == "sightmap").count(), 4);
    }

    #[test]
    fn test_duplicate_amli_arc_is_preserved() {
        let providers = default_providers();
        assert_eq!(providers[0], providers[1]);
        assert_eq!(providers.iter().filter(|p| p.name() == "AMLI Arc").count(), 2);
    }

    #[test]
    fn test_default_providers_are_valid() {
        for provider in default_providers() {
            assert!(provider.validate().is_ok(), "{} should be valid", provider.name());
        }
    }
}

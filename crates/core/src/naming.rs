use crate::types::{NamingMode, StyleDeclaration};

/// 命名策略 trait
pub trait NamingStrategy {
    fn generate_name(&self, styles: &StyleDeclaration) -> String;
}

/// Hash 命名策略：基于声明内容生成稳定 hash
pub struct HashNaming;

impl NamingStrategy for HashNaming {
    fn generate_name(&self, styles: &StyleDeclaration) -> String {
        let hash = blake3::hash(styles.fingerprint().as_bytes());

        // 取前 6 个字节的十六进制表示
        let hex = hash.to_hex();
        format!("c_{}", &hex[..12])
    }
}

/// Readable 命名策略：由属性名首字母组合出可读名称
pub struct ReadableNaming;

impl ReadableNaming {
    /// 属性名缩写
    ///
    /// 例如：
    /// - "padding-top" → "pt"
    /// - "color" → "c"
    /// - "--foreground-text" → "ft"
    /// - ":focus" → "f"
    fn abbreviate(property: &str) -> String {
        property
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl NamingStrategy for ReadableNaming {
    fn generate_name(&self, styles: &StyleDeclaration) -> String {
        if styles.is_empty() {
            return "empty".to_string();
        }

        let combined = styles
            .keys()
            .map(Self::abbreviate)
            .collect::<Vec<_>>()
            .join("_");

        // 限制总长度，避免过长
        if combined.len() > 32 {
            // 截断并添加 hash 后缀
            let truncated = combined[..24].trim_end_matches('_');
            let hash = blake3::hash(styles.fingerprint().as_bytes());
            format!("{}_{}", truncated, &hash.to_hex()[..6])
        } else {
            combined
        }
    }
}

/// 根据 NamingMode 创建对应的策略
pub fn create_naming_strategy(mode: NamingMode) -> Box<dyn NamingStrategy> {
    match mode {
        NamingMode::Hash => Box::new(HashNaming),
        NamingMode::Readable => Box::new(ReadableNaming),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StyleValue;

    fn declaration(pairs: &[(&str, &str)]) -> StyleDeclaration {
        let mut styles = StyleDeclaration::new();
        for (key, value) in pairs {
            styles.insert(*key, StyleValue::Single(value.to_string()));
        }
        styles
    }

    #[test]
    fn test_hash_naming_stability() {
        let styles = declaration(&[("padding-top", "8px"), ("color", "#313131")]);

        let name1 = HashNaming.generate_name(&styles);
        let name2 = HashNaming.generate_name(&styles);

        assert_eq!(name1, name2, "Hash naming should be stable");
        assert!(name1.starts_with("c_"), "Hash name should start with c_");
        assert_eq!(name1.len(), 14, "Hash name should be c_ + 12 chars");
    }

    #[test]
    fn test_hash_naming_different_inputs() {
        let a = declaration(&[("padding-top", "8px")]);
        let b = declaration(&[("padding-top", "16px")]);
        assert_ne!(HashNaming.generate_name(&a), HashNaming.generate_name(&b));
    }

    #[test]
    fn test_readable_naming() {
        let styles = declaration(&[("padding-top", "8px"), ("color", "#313131"), (":focus", "x")]);
        assert_eq!(ReadableNaming.generate_name(&styles), "pt_c_f");
    }

    #[test]
    fn test_readable_naming_long() {
        let keys = [
            "box-sizing",
            "list-style",
            "margin",
            "padding",
            "border-width",
            "border-top-width",
            "border-right-width",
            "border-bottom-width",
            "border-left-width",
            "border-color",
            "border-style",
        ];
        let pairs: Vec<(&str, &str)> = keys.iter().map(|k| (*k, "x")).collect();
        let name = ReadableNaming.generate_name(&declaration(&pairs));
        assert!(name.len() <= 32, "{}", name);
        assert!(name.starts_with("bs_ls_m_p_bw_btw"));
    }

    #[test]
    fn test_readable_naming_empty() {
        assert_eq!(ReadableNaming.generate_name(&StyleDeclaration::new()), "empty");
    }

    #[test]
    fn test_create_strategy() {
        let styles = declaration(&[("color", "#313131")]);
        assert!(create_naming_strategy(NamingMode::Hash)
            .generate_name(&styles)
            .starts_with("c_"));
        assert_eq!(
            create_naming_strategy(NamingMode::Readable).generate_name(&styles),
            "c"
        );
    }
}

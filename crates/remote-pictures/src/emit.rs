use crate::ident::is_legal_binding;

/// One generated binding: the internal identifier, the consumer-facing
/// alias, and the path the import line references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRecord {
    pub binding: String,
    pub alias: String,
    pub import_path: String,
}

/// Export clause for a record. Consumers import by the original alias; the
/// internal binding is always a legal identifier. Aliases that are not
/// themselves legal bindings are exported as string-literal module names.
fn export_line(record: &BindingRecord) -> String {
    if record.alias == record.binding {
        format!("export {{ {} }};", record.binding)
    } else if is_legal_binding(&record.alias) {
        format!("export {{ {} as {} }};", record.binding, record.alias)
    } else {
        format!(
            "export {{ {} as \"{}\" }};",
            record.binding,
            escape_string_literal(&record.alias)
        )
    }
}

fn escape_string_literal(alias: &str) -> String {
    alias.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the re-export module for one collection. Records appear in the
/// order given.
pub fn render_module(records: &[BindingRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "import {} from \"{}\";\n",
            record.binding, record.import_path
        ));
        out.push_str(&export_line(record));
        out.push('\n');
    }
    out
}

/// Render the companion declaration file for one collection. Each binding
/// is declared as opaque image metadata; the export surface matches the
/// module's.
pub fn render_types(records: &[BindingRecord]) -> String {
    let mut out = String::from("import type { ImageMetadata } from \"astro\";\n");
    for record in records {
        out.push_str(&format!(
            "declare const {}: ImageMetadata;\n",
            record.binding
        ));
        out.push_str(&export_line(record));
        out.push('\n');
    }
    out
}

/// Box-drawn banner pointing at a collection's generated module.
/// Presentation only; has no effect on the data produced by a sync.
pub fn ready_banner(collection_id: &str, specifier: &str) -> String {
    let import_line =
        format!("│ import * as {collection_id} from \"{specifier}/{collection_id}\" │");
    let rule = "─".repeat(import_line.chars().count() - 2);
    format!("╭{rule}╮\n{import_line}\n╰{rule}╯")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(binding: &str, alias: &str, import_path: &str) -> BindingRecord {
        BindingRecord {
            binding: binding.to_owned(),
            alias: alias.to_owned(),
            import_path: import_path.to_owned(),
        }
    }

    #[test]
    fn module_reexports_matching_alias_directly() {
        let records = [record("banner", "banner", "../../public/remote/heroes-banner.png")];
        assert_eq!(
            render_module(&records),
            "import banner from \"../../public/remote/heroes-banner.png\";\n\
             export { banner };\n"
        );
    }

    #[test]
    fn module_aliases_legal_identifier() {
        let records = [record("heroImg", "hero_img", "../../public/remote/heroes-hero_img.png")];
        let text = render_module(&records);
        assert!(text.contains("export { heroImg as hero_img };"));
    }

    #[test]
    fn module_aliases_arbitrary_name_as_string_literal() {
        let records = [record(
            "mainBanner",
            "main banner!",
            "../../public/remote/heroes-main banner!.png",
        )];
        let text = render_module(&records);
        assert!(text.contains("export { mainBanner as \"main banner!\" };"));
    }

    #[test]
    fn module_preserves_record_order() {
        let records = [
            record("first", "first", "a.png"),
            record("second", "second", "b.png"),
            record("third", "third", "c.png"),
        ];
        let text = render_module(&records);
        let first = text.find("import first").unwrap();
        let second = text.find("import second").unwrap();
        let third = text.find("import third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn types_declare_opaque_image_metadata() {
        let records = [record("banner", "banner", "a.png")];
        assert_eq!(
            render_types(&records),
            "import type { ImageMetadata } from \"astro\";\n\
             declare const banner: ImageMetadata;\n\
             export { banner };\n"
        );
    }

    #[test]
    fn types_export_surface_matches_module() {
        let records = [record("mainBanner", "main banner", "a.png")];
        let module = render_module(&records);
        let types = render_types(&records);
        let export = "export { mainBanner as \"main banner\" };";
        assert!(module.contains(export));
        assert!(types.contains(export));
    }

    #[test]
    fn banner_rules_match_import_line_width() {
        let banner = ready_banner("heroes", "remote-pictures");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("import * as heroes from \"remote-pictures/heroes\""));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert_eq!(lines[2].chars().count(), lines[1].chars().count());
    }
}

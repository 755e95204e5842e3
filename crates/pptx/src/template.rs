//! Static package parts shared by every generated presentation.
//!
//! One slide master with a single "Title Only" layout and a plain Office
//! theme. Slides carry all of their own formatting, so the master only needs
//! enough structure to make the package valid.

/// Slide master with the default text styles.
pub fn slide_master_xml() -> &'static str {
    include_str!("../resources/slideMasters/slideMaster1.xml")
}

/// Relationships of the slide master: its layout and the theme.
pub fn slide_master_rels_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#,
        r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>"#,
        "</Relationships>"
    )
}

/// The "Title Only" layout every slide is bound to.
pub fn title_only_layout_xml() -> &'static str {
    include_str!("../resources/slideLayouts/slideLayout1.xml")
}

pub fn title_only_layout_rels_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>"#,
        "</Relationships>"
    )
}

pub fn theme_xml() -> &'static str {
    include_str!("../resources/theme/theme1.xml")
}

pub fn pres_props_xml() -> &'static str {
    include_str!("../resources/presProps.xml")
}

pub fn view_props_xml() -> &'static str {
    include_str!("../resources/viewProps.xml")
}

pub fn table_styles_xml() -> &'static str {
    include_str!("../resources/tableStyles.xml")
}

/// Package-level relationships pointing at the main parts.
pub fn root_rels_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>"#,
        r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
        r#"<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>"#,
        "</Relationships>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_parts_are_xml() {
        for part in [
            slide_master_xml(),
            title_only_layout_xml(),
            theme_xml(),
            pres_props_xml(),
            view_props_xml(),
            table_styles_xml(),
        ] {
            assert!(part.starts_with("<?xml"));
        }
    }

    #[test]
    fn test_layout_is_title_only() {
        assert!(title_only_layout_xml().contains(r#"type="titleOnly""#));
        assert!(slide_master_xml().contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
    }
}

use deck_core::content::IMAGE_DIR;
use deck_core::style::{BLACK, BRAND_NAVY};
use deck_core::{ai_agents_overview, Deck, LineSpec, ParagraphStyle, SlideSpec};
use deck_pptx::inspect::PictureOutline;
use deck_pptx::units::inches;
use deck_pptx::{DeckInspector, DeckRenderer};
use std::io::Read;
use std::path::Path;

fn render_and_inspect(deck: &Deck, asset_root: &Path) -> (deck_pptx::RenderSummary, deck_pptx::DeckOutline) {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("deck.pptx");

    let summary = DeckRenderer::new()
        .with_asset_root(asset_root)
        .render(deck, &output)
        .unwrap();
    let outline = DeckInspector::new().inspect_path(&output).unwrap();
    (summary, outline)
}

#[test]
fn builtin_deck_renders_three_slides_in_order() {
    let deck = ai_agents_overview();
    let empty_assets = tempfile::tempdir().unwrap();
    let (summary, outline) = render_and_inspect(&deck, empty_assets.path());

    assert_eq!(summary.slide_count, 3);
    assert!(summary.bytes_written > 0);
    assert_eq!(
        outline.titles(),
        vec![
            "What Are AI Agents? 🤖",
            "How They Work & Examples You Know 🔄",
            "Why This Matters & What's Next 🚀",
        ]
    );
    let numbers: Vec<usize> = outline.slides.iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn body_paragraphs_follow_the_rule_table() {
    let deck = ai_agents_overview();
    let empty_assets = tempfile::tempdir().unwrap();
    let (_, outline) = render_and_inspect(&deck, empty_assets.path());

    for (spec, slide) in deck.slides.iter().zip(&outline.slides) {
        assert_eq!(slide.body.len(), spec.lines.len());

        for (line, paragraph) in spec.lines.iter().zip(&slide.body) {
            let style = ParagraphStyle::for_line(line);
            assert_eq!(paragraph.text, line.text);
            assert_eq!(paragraph.size_pt, Some(style.size_pt));
            assert_eq!(paragraph.bold, style.bold);
            assert_eq!(paragraph.color, style.color);
            assert_eq!(paragraph.space_after_pt, Some(style.space_after_pt));
        }
    }

    let last = &outline.slides[2].body;
    let takeaway = last.iter().find(|p| p.text == "Key Takeaway:").unwrap();
    assert_eq!(takeaway.color, Some(BLACK));
    assert_eq!(takeaway.size_pt, Some(28.0));
    let benefits = &last[0];
    assert_eq!(benefits.color, Some(BRAND_NAVY));
}

#[test]
fn spacer_lines_are_kept_except_a_leading_one() {
    let deck = Deck::new(vec![SlideSpec::new("Spacing")
        .with_line(LineSpec::spacer())
        .with_line(LineSpec::header("First"))
        .with_line(LineSpec::spacer())
        .with_line(LineSpec::body("Second"))
        .with_line(LineSpec::spacer())]);

    let empty_assets = tempfile::tempdir().unwrap();
    let (_, outline) = render_and_inspect(&deck, empty_assets.path());

    let texts: Vec<&str> = outline.slides[0].body.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["First", "", "Second", ""]);
}

#[test]
fn missing_image_is_skipped() {
    let deck = Deck::new(vec![SlideSpec::new("No picture").with_image("missing.png")]);
    let empty_assets = tempfile::tempdir().unwrap();
    let (summary, outline) = render_and_inspect(&deck, empty_assets.path());

    assert_eq!(summary.picture_count, 0);
    assert_eq!(summary.skipped_images, vec![Path::new("missing.png").to_path_buf()]);
    assert!(outline.slides[0].pictures.is_empty());
}

#[test]
fn existing_png_is_placed_in_right_column() {
    let assets = tempfile::tempdir().unwrap();
    let image_dir = assets.path().join(IMAGE_DIR);
    std::fs::create_dir_all(&image_dir).unwrap();
    std::fs::write(image_dir.join("ai-automation.png"), b"\x89PNG\r\n\x1a\n").unwrap();

    let deck = ai_agents_overview();
    let (summary, outline) = render_and_inspect(&deck, assets.path());

    assert_eq!(summary.picture_count, 1);
    assert_eq!(summary.skipped_images.len(), 2);

    assert_eq!(
        outline.slides[0].pictures,
        vec![PictureOutline {
            x: inches(8.2),
            y: inches(1.5),
            cx: inches(4.5),
            cy: inches(4.5),
        }]
    );
    assert!(outline.slides[1].pictures.is_empty());
    assert!(outline.slides[2].pictures.is_empty());
}

#[test]
fn unsupported_extension_is_skipped() {
    let assets = tempfile::tempdir().unwrap();
    std::fs::write(assets.path().join("diagram.svg"), b"<svg/>").unwrap();

    let deck = Deck::new(vec![SlideSpec::new("Vector").with_image("diagram.svg")]);
    let (summary, outline) = render_and_inspect(&deck, assets.path());

    assert_eq!(summary.picture_count, 0);
    assert!(outline.slides[0].pictures.is_empty());
}

#[test]
fn empty_deck_produces_valid_package() {
    let empty_assets = tempfile::tempdir().unwrap();
    let (summary, outline) = render_and_inspect(&Deck::default(), empty_assets.path());

    assert_eq!(summary.slide_count, 0);
    assert!(outline.slides.is_empty());
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("deck.pptx");
    std::fs::write(&output, b"stale").unwrap();

    let deck = Deck::new(vec![SlideSpec::new("Fresh")]);
    DeckRenderer::new().render(&deck, &output).unwrap();

    let outline = DeckInspector::new().inspect_path(&output).unwrap();
    assert_eq!(outline.titles(), vec!["Fresh"]);
}

#[test]
fn write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no-such-dir").join("deck.pptx");

    let err = DeckRenderer::new()
        .render(&ai_agents_overview(), &output)
        .unwrap_err();
    assert!(matches!(err, deck_core::Error::IoError(_)));
}

#[test]
fn control_characters_in_loaded_deck_stay_well_formed() {
    let deck = Deck::from_json_str(
        r#"{"slides":[{"title":"A\u000bB","lines":[{"text":"line1\nline2"},{"text":"bell\u0007"}]}]}"#,
    )
    .unwrap();

    let (cursor, _) = DeckRenderer::new()
        .render_to_writer(&deck, std::io::Cursor::new(Vec::new()))
        .unwrap();
    let bytes = cursor.into_inner();

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.as_slice())).unwrap();
    let mut xml = String::new();
    archive
        .by_name("ppt/slides/slide1.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();

    assert!(
        !xml.chars().any(|c| c < ' ' && !matches!(c, '\t' | '\n' | '\r')),
        "slide XML carries characters XML 1.0 forbids"
    );
    let mut reader = quick_xml::Reader::from_str(&xml);
    loop {
        match reader.read_event() {
            Ok(quick_xml::events::Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("slide XML is not well-formed: {}", e),
        }
    }
    assert_eq!(xml.matches("<a:br>").count(), 2);

    let outline = DeckInspector::new().inspect(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(outline.titles(), vec!["A\nB"]);
    let texts: Vec<&str> = outline.slides[0].body.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["line1\nline2", "bell_x0007_"]);
}

use super::{
    BoldFraction, Emphasis, Span, TransformedDocument, bold_length, split_paragraphs, split_word,
    transform, transform_with, transform_word,
};

fn bold(text: &str) -> Span<'_> {
    Span {
        text,
        emphasis: Emphasis::Bold,
    }
}

fn normal(text: &str) -> Span<'_> {
    Span {
        text,
        emphasis: Emphasis::Normal,
    }
}

/// Words of paragraph `p` as `(bold, normal)` pairs.
fn pairs<'a>(doc: &TransformedDocument<'a>, p: usize) -> Vec<(Option<&'a str>, &'a str)> {
    doc.paragraphs[p]
        .words
        .iter()
        .map(|w| (w.bold(), w.normal()))
        .collect()
}

#[test]
fn hello_world_at_default_fraction() {
    let doc = transform("hello world", BoldFraction::DEFAULT);
    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(
        pairs(&doc, 0),
        [(Some("he"), "llo"), (Some("wo"), "rld")]
    );
}

#[test]
fn trailing_punctuation_stays_normal() {
    let doc = transform_with("Hi, there!", 0.5);
    assert_eq!(doc.paragraphs[0].words[0].spans, [bold("H"), normal("i,")]);
    assert_eq!(doc.paragraphs[0].words[1].spans, [bold("the"), normal("re!")]);
}

#[test]
fn blank_line_splits_paragraphs() {
    let doc = transform_with("a\n\nb", 0.4);
    assert_eq!(doc.paragraphs.len(), 2);
    assert_eq!(doc.paragraphs[0].words[0].spans, [bold("a"), normal("")]);
    assert_eq!(doc.paragraphs[1].words[0].spans, [bold("b"), normal("")]);
    assert_eq!(doc.paragraphs[1].break_before, "\n\n");
}

#[test]
fn pure_punctuation_is_one_normal_span() {
    let doc = transform_with("---", 0.4);
    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(doc.paragraphs[0].words.len(), 1);
    assert_eq!(doc.paragraphs[0].words[0].spans, [normal("---")]);
    assert_eq!(doc.paragraphs[0].words[0].bold(), None);
}

#[test]
fn empty_document_is_one_empty_paragraph() {
    let doc = transform_with("", 0.4);
    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(doc.paragraphs[0].words.len(), 1);
    assert_eq!(doc.paragraphs[0].words[0].spans, [normal("")]);
    assert_eq!(doc.to_plain_text(), "");
    assert_eq!(doc.word_count(), 0);
}

#[test]
fn bold_length_bounds_hold_across_fractions() {
    let fractions = [0.0, 0.05, 0.1, 0.25, 0.4, 0.5, 0.7, 0.99, 1.0];
    for stem_len in 1..=40 {
        for f in fractions {
            let n = bold_length(stem_len, BoldFraction::new(f));
            assert!(
                (1..=stem_len).contains(&n),
                "stem_len={stem_len} f={f} -> {n}"
            );
        }
    }
}

#[test]
fn bold_length_of_empty_stem_is_zero() {
    assert_eq!(bold_length(0, BoldFraction::new(1.0)), 0);
}

#[test]
fn bold_length_rounds_up() {
    assert_eq!(bold_length(5, BoldFraction::new(0.5)), 3);
    assert_eq!(bold_length(2, BoldFraction::new(0.5)), 1);
    assert_eq!(bold_length(5, BoldFraction::new(0.4)), 2);
    assert_eq!(bold_length(7, BoldFraction::new(0.1)), 1);
}

#[test]
fn bold_length_is_monotonic_in_fraction() {
    for stem_len in 1..=25 {
        let mut previous = 0;
        for step in 0..=100 {
            let n = bold_length(stem_len, BoldFraction::new(step as f64 / 100.0));
            assert!(n >= previous, "stem_len={stem_len} step={step}");
            previous = n;
        }
    }
}

#[test]
fn extreme_fractions_clamp() {
    let zero = transform_word("reading", BoldFraction::new(0.0));
    assert_eq!(zero.spans, [bold("r"), normal("eading")]);

    let full = transform_word("reading", BoldFraction::new(1.0));
    assert_eq!(full.spans, [bold("reading"), normal("")]);

    let over = transform_with("reading", 7.5);
    assert_eq!(over.paragraphs[0].words[0].bold(), Some("reading"));

    let negative = transform_with("reading", -3.0);
    assert_eq!(negative.paragraphs[0].words[0].bold(), Some("r"));

    let nan = transform_with("reading", f64::NAN);
    assert_eq!(nan.paragraphs[0].words[0].bold(), Some("r"));
}

#[test]
fn split_word_separates_stem_and_trailer() {
    assert_eq!(split_word("there!"), ("there", "!"));
    assert_eq!(split_word("snake_case,"), ("snake_case", ","));
    assert_eq!(split_word("42%"), ("42", "%"));
    assert_eq!(split_word("..."), ("", "..."));
    assert_eq!(split_word(""), ("", ""));
    assert_eq!(split_word("don't"), ("don", "'t"));
}

#[test]
fn leading_punctuation_means_empty_stem() {
    let word = transform_word("\"quoted\"", BoldFraction::new(0.5));
    assert_eq!(word.spans, [normal("\"quoted\"")]);
}

#[test]
fn unicode_stems_slice_on_char_boundaries() {
    let word = transform_word("éléphant.", BoldFraction::new(0.4));
    // 8 chars -> ceil(3.2) = 4
    assert_eq!(word.spans, [bold("élép"), normal("hant.")]);

    let word = transform_word("日本語", BoldFraction::new(0.5));
    assert_eq!(word.spans, [bold("日本"), normal("語")]);
}

#[test]
fn consecutive_spaces_yield_empty_words() {
    let doc = transform_with("a  b", 0.4);
    let words = &doc.paragraphs[0].words;
    assert_eq!(words.len(), 3);
    assert_eq!(words[1].spans, [normal("")]);
    assert_eq!(doc.to_plain_text(), "a  b");
}

#[test]
fn tabs_and_single_newlines_stay_in_tokens() {
    let doc = transform_with("one\ttwo\nthree", 0.4);
    assert_eq!(doc.paragraphs.len(), 1);
    let words = &doc.paragraphs[0].words;
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].spans, [bold("on"), normal("e\ttwo\nthree")]);
}

#[test]
fn whitespace_only_blank_lines_split() {
    let doc = transform_with("first\n  \t\n\nsecond\r\n\r\nthird", 0.4);
    assert_eq!(doc.paragraphs.len(), 3);
    assert_eq!(doc.paragraphs[1].break_before, "\n  \t\n\n");
    assert_eq!(doc.paragraphs[2].break_before, "\r\n\r\n");
    assert_eq!(doc.paragraphs[2].to_plain_text(), "third");
}

#[test]
fn plain_text_reconstructs_source() {
    let src = "The quick, brown fox!\n\n  jumps over -- the lazy dog.\n";
    assert_eq!(transform_with(src, 0.3).to_plain_text(), src);
}

#[test]
fn order_is_preserved() {
    let doc = transform_with("b a b\n\na", 0.5);
    let texts: Vec<Vec<String>> = doc
        .paragraphs
        .iter()
        .map(|p| p.words.iter().map(|w| w.text()).collect())
        .collect();
    assert_eq!(texts, [vec!["b", "a", "b"], vec!["a"]]);
}

#[test]
fn transform_is_deterministic() {
    let src = "Speed reading,\n\nfor everyone: 2024 edition.";
    assert_eq!(transform_with(src, 0.45), transform_with(src, 0.45));
}

#[test]
fn paragraph_spans_mark_separators() {
    let doc = transform_with("ab cd", 0.5);
    let spans: Vec<_> = doc.paragraphs[0].spans().collect();
    assert_eq!(
        spans,
        [
            Some(bold("a")),
            Some(normal("b")),
            None,
            Some(bold("c")),
            Some(normal("d")),
        ]
    );
}

#[test]
fn split_paragraphs_without_blank_lines() {
    let parts: Vec<_> = split_paragraphs("one\ntwo").collect();
    assert_eq!(parts, [("", "one\ntwo")]);
    let parts: Vec<_> = split_paragraphs("").collect();
    assert_eq!(parts, [("", "")]);
}

#[test]
fn split_paragraphs_keeps_leading_and_trailing_empties() {
    let parts: Vec<_> = split_paragraphs("\n\nbody\n\n").collect();
    assert_eq!(parts, [("", ""), ("\n\n", "body"), ("\n\n", "")]);
}

#[test]
fn fraction_new_clamps() {
    assert_eq!(BoldFraction::new(-0.5).get(), 0.0);
    assert_eq!(BoldFraction::new(1.5).get(), 1.0);
    assert_eq!(BoldFraction::new(f64::INFINITY).get(), 1.0);
    assert_eq!(BoldFraction::new(f64::NAN).get(), 0.0);
    assert_eq!(BoldFraction::new(0.25).get(), 0.25);
}

#[test]
fn fraction_steps_on_grid_and_saturates() {
    let f = BoldFraction::DEFAULT;
    assert_eq!(f.step_up().percent(), 45);
    assert_eq!(f.step_down().percent(), 35);
    assert_eq!(BoldFraction::UI_MAX.step_up(), BoldFraction::UI_MAX);
    assert_eq!(BoldFraction::UI_MIN.step_down(), BoldFraction::UI_MIN);

    let mut f = BoldFraction::UI_MIN;
    for _ in 0..12 {
        f = f.step_up();
    }
    assert_eq!(f, BoldFraction::UI_MAX);
}

#[test]
fn fraction_steps_snap_off_grid_values() {
    let f = BoldFraction::new(0.42);
    assert_eq!(f.step_up().percent(), 45);
    assert_eq!(f.step_down().percent(), 40);
    assert_eq!(BoldFraction::new(0.95).step_down(), BoldFraction::UI_MAX.step_down());
}

#[test]
fn fraction_display() {
    assert_eq!(BoldFraction::DEFAULT.to_string(), "0.40");
    assert_eq!(BoldFraction::DEFAULT.percent(), 40);
}

use proptest::prelude::*;
use summarank::{ExtractiveSummarizer, RougeEvaluator, SentenceSegmenter, Variant};

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{3,9}", 3..9).prop_map(|words| {
        let mut sentence = words.join(" ");
        sentence[..1].make_ascii_uppercase();
        sentence.push('.');
        sentence
    })
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 1..8).prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #[test]
    fn segmentation_is_idempotent(s in ".*") {
        let segmenter = SentenceSegmenter::new();
        prop_assert_eq!(segmenter.segment(&s), segmenter.segment(&s));
    }

    #[test]
    fn segments_exceed_length_floor(s in ".*") {
        for sentence in SentenceSegmenter::new().segment(&s) {
            prop_assert!(sentence.chars().count() > 10);
            prop_assert_eq!(sentence.trim(), sentence.as_str());
        }
    }

    #[test]
    fn summaries_preserve_document_order(text in document(), k in 1usize..5) {
        for variant in Variant::ALL {
            let summarizer = ExtractiveSummarizer::new(variant);
            let sentences = summarizer.segment(&text);
            let summary = summarizer.summarize_sentences(&sentences, k).unwrap();

            prop_assert_eq!(summary.len(), k.min(sentences.len()));
            prop_assert!(summary.indices.windows(2).all(|w| w[0] < w[1]));
            for (index, sentence) in summary.indices.iter().zip(&summary.sentences) {
                prop_assert_eq!(&sentences[*index], sentence);
            }
        }
    }

    #[test]
    fn short_documents_returned_whole(text in document()) {
        for variant in Variant::ALL {
            let summarizer = ExtractiveSummarizer::new(variant);
            let sentences = summarizer.segment(&text);
            let k = sentences.len().max(1);
            let summary = summarizer.summarize_sentences(&sentences, k).unwrap();
            prop_assert_eq!(summary.sentences, sentences);
        }
    }

    #[test]
    fn rouge_scores_are_bounded(reference in ".*", candidate in ".*") {
        let record = RougeEvaluator::new().evaluate(&reference, &candidate);
        for (_, value) in record.metrics() {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn self_evaluation_is_perfect(text in "[a-z]{1,8}( [a-z]{1,8}){1,12}") {
        let record = RougeEvaluator::new().evaluate(&text, &text);
        for (_, value) in record.metrics() {
            prop_assert!((value - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_candidate_scores_zero(reference in ".*") {
        let record = RougeEvaluator::new().evaluate(&reference, "");
        for (_, value) in record.metrics() {
            prop_assert_eq!(value, 0.0);
        }
    }
}

//! Integration tests for training and prediction

use mail_classifier::classifier::{
    Label, NaiveBayesTextClassifier, Normalizer, TrainedModel, Vocabulary,
};
use mail_classifier::corpus::{CorpusSchema, LabeledCorpus};
use mail_classifier::ClassifierError;

fn phishing_corpus() -> LabeledCorpus {
    LabeledCorpus::from_pairs([
        ("URGENT: verify your account or it will be closed", 1),
        ("Urgent action required on your mailbox quota", 1),
        ("Your password expires today, urgent update needed", 1),
        ("Minutes from Tuesday's architecture review", 0),
        ("Holiday schedule for the support team", 0),
        ("Draft of the Q3 budget for your comments", 0),
        ("Lunch and learn: introduction to Rust", 0),
    ])
}

#[test]
fn test_win_free_money_scenario() {
    let corpus = LabeledCorpus::from_pairs([
        ("win free money now", 1),
        ("meeting notes attached", 0),
    ]);
    let model = TrainedModel::train(&corpus, Normalizer::default()).unwrap();

    assert_eq!(model.predict("win free money now"), Label::Positive);
    assert_eq!(model.predict("meeting notes attached"), Label::Negative);
}

#[test]
fn test_short_row_counts_in_priors_only() {
    let corpus = LabeledCorpus::from_pairs([
        ("hi bob", 1),
        ("claim your reward today", 1),
        ("notes from the standup", 0),
    ]);
    let model = TrainedModel::train(&corpus, Normalizer::default()).unwrap();

    assert!(!model.vocabulary().contains("hi"));
    assert!(!model.vocabulary().contains("bob"));
    assert_eq!(model.stats().positive_rows, 2);
    assert!((model.priors().positive - 2.0 / 3.0).abs() < 1e-12);
    // only "claim your reward today" contributes class-1 words
    assert_eq!(model.total_words(Label::Positive), 4);
}

#[test]
fn test_empty_input_follows_priors() {
    let model = TrainedModel::train(&phishing_corpus(), Normalizer::default()).unwrap();
    assert_eq!(model.predict(""), Label::Negative);

    let swapped = TrainedModel::train(
        &phishing_corpus().with_swapped_labels(),
        Normalizer::default(),
    )
    .unwrap();
    assert_eq!(swapped.predict(""), Label::Positive);
}

#[test]
fn test_swapped_labels_invert_predictions() {
    let corpus = phishing_corpus();
    let model = TrainedModel::train(&corpus, Normalizer::default()).unwrap();
    let swapped = TrainedModel::train(&corpus.with_swapped_labels(), Normalizer::default()).unwrap();

    for message in [
        "urgent: verify your mailbox password",
        "comments on the architecture review",
        "holiday lunch with the team",
    ] {
        assert_eq!(swapped.predict(message), model.predict(message).flipped());
    }
}

#[test]
fn test_exact_tie_resolves_to_class_zero() {
    // identical rows in both classes give equal priors and likelihoods
    let corpus = LabeledCorpus::from_pairs([
        ("quarterly planning session", 1),
        ("quarterly planning session", 0),
    ]);
    let model = TrainedModel::train(&corpus, Normalizer::default()).unwrap();

    assert_eq!(model.predict("quarterly planning session"), Label::Negative);
    assert_eq!(model.predict("entirely unrelated words here"), Label::Negative);
    assert_eq!(model.predict(""), Label::Negative);
}

#[test]
fn test_class_separation() {
    let model = TrainedModel::train(&phishing_corpus(), Normalizer::default()).unwrap();

    let positive = model.probabilities(Label::Positive).get("urgent").unwrap();
    let negative = model.probabilities(Label::Negative).get("urgent").unwrap();
    assert!(positive > negative);
}

#[test]
fn test_probability_validity() {
    let model = TrainedModel::train(&phishing_corpus(), Normalizer::default()).unwrap();

    for label in [Label::Positive, Label::Negative] {
        let probs = model.probabilities(label);
        assert_eq!(probs.len(), model.vocab_size());
        for (_, p) in probs.iter() {
            assert!(p > 0.0 && p <= 1.0);
        }
        assert!(probs.fallback() > 0.0);
    }

    let priors = model.priors();
    assert!((priors.positive + priors.negative - 1.0).abs() < 1e-12);
}

#[test]
fn test_vocabulary_matches_normalized_corpus() {
    let corpus = phishing_corpus();
    let normalizer = Normalizer::default();
    let expected = Vocabulary::build(
        corpus
            .rows()
            .iter()
            .map(|r| normalizer.normalize(r.text.as_str())),
    );

    let model = TrainedModel::train(&corpus, normalizer).unwrap();
    assert_eq!(model.vocabulary(), &expected);
    assert!(model.vocabulary().contains("urgent"));
    // "Q3" loses its digit
    assert!(model.vocabulary().contains("q"));
    assert!(!model.vocabulary().contains("urgent:"));
}

#[test]
fn test_degenerate_corpora_rejected() {
    let empty = TrainedModel::train(&LabeledCorpus::new(), Normalizer::default()).unwrap_err();
    assert!(matches!(empty, ClassifierError::InsufficientData(_)));

    let all_short = LabeledCorpus::from_pairs([("hi", 1), ("ok", 0)]);
    let err = TrainedModel::train(&all_short, Normalizer::default()).unwrap_err();
    assert!(matches!(err, ClassifierError::InsufficientData(_)));

    let unlabelled = LabeledCorpus::from_pairs([("something without a label", -1)]);
    let err = TrainedModel::train(&unlabelled, Normalizer::default()).unwrap_err();
    assert!(matches!(err, ClassifierError::InsufficientData(_)));
}

#[test]
fn test_generic_classifier_instances_are_independent() {
    let mut phishing = NaiveBayesTextClassifier::new(CorpusSchema::phishing());
    let spam = NaiveBayesTextClassifier::new(CorpusSchema::spam());

    phishing.train(&phishing_corpus()).unwrap();

    assert!(phishing.is_trained());
    assert!(!spam.is_trained());
    assert_eq!(phishing.verdict("urgent: verify your account").unwrap(), "Phishing");
    assert!(matches!(spam.predict("urgent"), Err(ClassifierError::ModelNotTrained)));
}

#[test]
fn test_concurrent_prediction() {
    let classifier = NaiveBayesTextClassifier::phishing()
        .trained(&phishing_corpus())
        .unwrap();
    let model = classifier.model().unwrap().clone();
    let expected = model.predict("urgent: verify your account");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = model.clone();
            std::thread::spawn(move || model.predict("urgent: verify your account"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

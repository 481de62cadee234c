// Grammatical filter — part-of-speech tagging and function-word removal.
//
// The tagger is a trait so a statistical tagger can be dropped in later. The
// default RuleTagger works from closed-class word lists, suffix cues and the
// reference word list; it only has to be good enough to spot adverbs and
// inflected verbs in already-cleaned review text.

use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::debug;

use super::lemma::{Lemmatizer, PartOfSpeech, VERB_EXCEPTIONS};

/// One token as seen by the tagger.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedToken {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// The tagger's own stopword flag, independent of the pipeline stoplists.
    pub is_stop: bool,
    pub is_alpha: bool,
}

/// Trait for tagging a whitespace-tokenized string.
pub trait PosTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;

    /// Whether a single word carries the tagger's stopword flag.
    fn is_stop(&self, word: &str) -> bool {
        self.tag(word).first().is_some_and(|t| t.is_stop)
    }
}

/// Tagger-internal stop list (closed-class words in the spaCy English style).
const TAGGER_STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
    "both", "bottom", "but", "by", "ca", "call", "can", "cannot", "could", "did", "do", "does",
    "doing", "done", "down", "due", "during", "each", "either", "else", "elsewhere", "empty",
    "enough", "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few",
    "first", "for", "former", "formerly", "from", "front", "full", "further", "get", "give",
    "go", "had", "has", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "indeed",
    "into", "is", "it", "its", "itself", "just", "keep", "last", "latter", "least", "less",
    "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "no", "nobody", "none", "noone", "nor", "not", "nothing",
    "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part", "per",
    "perhaps", "please", "put", "quite", "rather", "really", "regarding", "same", "say", "see",
    "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "so", "some", "somehow", "someone", "something", "sometime", "sometimes",
    "somewhere", "still", "such", "take", "than", "that", "the", "their", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon",
    "these", "they", "third", "this", "those", "though", "through", "throughout", "thru",
    "thus", "to", "together", "too", "top", "toward", "towards", "under", "unless", "until",
    "up", "upon", "us", "used", "using", "various", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Adverbs that carry no `-ly` cue.
const ADVERBS: &[&str] = &[
    "again", "almost", "already", "also", "always", "anyway", "away", "back", "else", "enough",
    "even", "ever", "everywhere", "far", "fast", "here", "how", "however", "indeed", "instead",
    "just", "later", "maybe", "much", "never", "not", "now", "often", "once", "perhaps",
    "pretty", "quite", "rather", "really", "seldom", "so", "sometimes", "soon", "still",
    "then", "there", "therefore", "thus", "together", "too", "very", "well", "yet",
];

/// `-ly` words that are not adverbs.
const LY_NON_ADVERBS: &[&str] = &[
    "family", "belly", "jelly", "friendly", "early", "daily", "weekly", "monthly", "yearly",
    "lovely", "lonely", "ugly", "holy", "only", "silly", "likely", "lively", "costly", "curly",
    "chilly", "oily", "bully", "rally", "ally", "italy", "supply", "reply", "apply", "fly",
    "july", "homely", "elderly", "orderly", "timely", "deadly", "hilly", "smelly", "wobbly",
    "crumbly", "bubbly", "melancholy", "anomaly",
];

/// `-ing` words that are nouns in review text.
const NOUN_ING: &[&str] = &[
    "pudding", "wedding", "morning", "evening", "dressing", "stuffing", "filling", "topping",
    "seasoning", "icing", "frosting", "dumpling", "serving", "helping", "ceiling", "building",
    "parking", "booking", "seating", "setting", "lighting", "ring", "king", "thing", "string",
    "spring", "wing", "ping", "sing", "sting", "swing", "bring", "nothing", "something",
    "everything", "anything", "during", "ming", "ling", "herring", "tasting", "offering",
    "meaning", "feeling", "opening", "earring", "railing", "awning",
];

/// Determiners, pronouns, prepositions and conjunctions.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its",
    "our", "their", "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them",
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
    "over", "under", "and", "or", "but", "nor", "if", "because", "as", "until", "while",
    "can", "could", "should", "would", "will", "shall", "may", "might", "must",
];

static TAGGER_STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TAGGER_STOPWORDS.iter().copied().collect());
static ADVERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ADVERBS.iter().copied().collect());
static LY_NON_ADVERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LY_NON_ADVERBS.iter().copied().collect());
static NOUN_ING_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NOUN_ING.iter().copied().collect());
static FUNCTION_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FUNCTION_WORDS.iter().copied().collect());

/// Heuristic tagger backed by the lemmatizer's word list.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    lemmatizer: Lemmatizer,
}

impl RuleTagger {
    pub fn new(lemmatizer: Lemmatizer) -> Self {
        Self { lemmatizer }
    }

    /// Best-guess part of speech for a single lowercase token.
    pub fn part_of_speech(&self, word: &str) -> PartOfSpeech {
        if ADVERB_SET.contains(word) || self.is_ly_adverb(word) {
            return PartOfSpeech::Adverb;
        }
        if VERB_EXCEPTIONS.contains_key(word) {
            return PartOfSpeech::Verb;
        }
        if NOUN_ING_SET.contains(word) {
            return PartOfSpeech::Noun;
        }
        if word.ends_with("ing") || word.ends_with("ed") {
            let lemma = self.lemmatizer.lemmatize(word, PartOfSpeech::Verb);
            if lemma != word && self.lemmatizer.words().contains(&lemma) {
                return PartOfSpeech::Verb;
            }
        }
        if FUNCTION_WORD_SET.contains(word) {
            return PartOfSpeech::Other;
        }
        if word.ends_with("ful") || word.ends_with("ous") || word.ends_with("less") {
            return PartOfSpeech::Adjective;
        }
        PartOfSpeech::Noun
    }

    fn is_ly_adverb(&self, word: &str) -> bool {
        if word.len() <= 4 || LY_NON_ADVERB_SET.contains(word) {
            return false;
        }
        let Some(stem) = word.strip_suffix("ly") else {
            return false;
        };

        let mut bases = vec![stem.to_string()];
        if let Some(s) = word.strip_suffix("ily") {
            bases.push(format!("{s}y"));
        }
        bases.push(format!("{stem}le"));
        if let Some(s) = word.strip_suffix("ically") {
            bases.push(format!("{s}ic"));
        }
        if let Some(s) = word.strip_suffix("lly") {
            bases.push(format!("{s}ll"));
        }

        let words = self.lemmatizer.words();
        bases.iter().any(|b| words.contains(b))
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.split_whitespace()
            .map(|word| {
                let pos = self.part_of_speech(word);
                TaggedToken {
                    text: word.to_string(),
                    lemma: self.lemmatizer.lemmatize(word, pos),
                    pos,
                    is_stop: TAGGER_STOP_SET.contains(word),
                    is_alpha: word.chars().all(char::is_alphabetic),
                }
            })
            .collect()
    }

    fn is_stop(&self, word: &str) -> bool {
        TAGGER_STOP_SET.contains(word)
    }
}

/// Two tagging passes: first keep alphabetic, non-stop tokens, then re-tag
/// the survivors and emit the lemma of everything that is not an adverb.
/// A lemma that is itself a tagger stopword ("called" -> "call") is dropped.
pub fn remove_function_words(text: &str, tagger: &dyn PosTagger) -> String {
    let content: Vec<String> = tagger
        .tag(text)
        .into_iter()
        .filter(|t| t.is_alpha && !t.is_stop)
        .map(|t| t.text)
        .collect();

    let lemmas: Vec<String> = tagger
        .tag(&content.join(" "))
        .into_iter()
        .filter(|t| t.pos != PartOfSpeech::Adverb)
        .map(|t| t.lemma)
        .filter(|lemma| !tagger.is_stop(lemma))
        .collect();

    debug!(
        content = content.len(),
        kept = lemmas.len(),
        "Removed function words and adverbs"
    );
    lemmas.join(" ")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::resources::wordlist::WordList;

    fn tagger(words: &[&str]) -> RuleTagger {
        let list = Arc::new(WordList::from_words(words.iter().copied()));
        RuleTagger::new(Lemmatizer::new(list))
    }

    #[test]
    fn test_ly_adverbs_need_a_base_word() {
        let t = tagger(&["quick", "happy", "gentle", "basic", "full"]);
        assert_eq!(t.part_of_speech("quickly"), PartOfSpeech::Adverb);
        assert_eq!(t.part_of_speech("happily"), PartOfSpeech::Adverb);
        assert_eq!(t.part_of_speech("gently"), PartOfSpeech::Adverb);
        assert_eq!(t.part_of_speech("basically"), PartOfSpeech::Adverb);
        assert_eq!(t.part_of_speech("fully"), PartOfSpeech::Adverb);
        assert_eq!(t.part_of_speech("friendly"), PartOfSpeech::Noun);
        assert_eq!(t.part_of_speech("burly"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_closed_class_adverbs() {
        let t = tagger(&[]);
        assert_eq!(t.part_of_speech("very"), PartOfSpeech::Adverb);
        assert_eq!(t.part_of_speech("soon"), PartOfSpeech::Adverb);
    }

    #[test]
    fn test_verb_detection() {
        let t = tagger(&["order", "bake"]);
        assert_eq!(t.part_of_speech("ordered"), PartOfSpeech::Verb);
        assert_eq!(t.part_of_speech("baking"), PartOfSpeech::Verb);
        assert_eq!(t.part_of_speech("went"), PartOfSpeech::Verb);
        // Known -ing nouns stay nouns
        assert_eq!(t.part_of_speech("pudding"), PartOfSpeech::Noun);
        // No dictionary base, no verb
        assert_eq!(t.part_of_speech("zorbing"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_adjective_suffixes_and_function_words() {
        let t = tagger(&[]);
        assert_eq!(t.part_of_speech("delicious"), PartOfSpeech::Adjective);
        assert_eq!(t.part_of_speech("flavorful"), PartOfSpeech::Adjective);
        assert_eq!(t.part_of_speech("with"), PartOfSpeech::Other);
        assert_eq!(t.part_of_speech("pasta"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_tag_flags() {
        let t = tagger(&["dish"]);
        let tags = t.tag("the dishes");
        assert_eq!(tags.len(), 2);
        assert!(tags[0].is_stop);
        assert!(!tags[1].is_stop);
        assert!(tags[1].is_alpha);
        assert_eq!(tags[1].lemma, "dish");
    }

    #[test]
    fn test_remove_function_words() {
        let t = tagger(&["waiter", "quick", "serve", "fresh", "dish"]);
        assert_eq!(
            remove_function_words("the waiter quickly served fresh dishes here", &t),
            "waiter serve fresh dish"
        );
    }

    #[test]
    fn test_stopword_lemmas_dropped() {
        let t = tagger(&["call", "move", "name", "serve"]);
        assert!(t.is_stop("call"));
        assert!(!t.is_stop("called"));
        assert_eq!(
            remove_function_words("called moved named served", &t),
            "serve"
        );
    }

    #[test]
    fn test_remove_function_words_empty() {
        let t = tagger(&[]);
        assert_eq!(remove_function_words("", &t), "");
        assert_eq!(remove_function_words("the and very", &t), "");
    }
}

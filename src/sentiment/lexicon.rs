use std::collections::HashMap;

use super::SentimentScorer;
use crate::model::SentimentScore;

// Empirical constants of the VADER family of rule-based scorers.
const BOOSTER_INCREMENT: f64 = 0.293;
const BOOSTER_DECREMENT: f64 = -0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

const DEFAULT_LEXICON: &[(&str, f64)] = &[
    ("accommodating", 1.8),
    ("adorable", 2.2),
    ("affordable", 1.3),
    ("amazing", 2.8),
    ("attentive", 1.7),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("beautifully", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("bright", 1.9),
    ("calm", 1.3),
    ("charming", 2.5),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("cleanest", 2.2),
    ("comfortable", 1.5),
    ("comfy", 1.8),
    ("convenient", 1.6),
    ("cool", 1.3),
    ("courteous", 2.3),
    ("cozy", 1.9),
    ("cute", 2.0),
    ("delicious", 2.7),
    ("efficient", 1.8),
    ("elegant", 2.1),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("exceptional", 2.9),
    ("excited", 1.4),
    ("fabulous", 2.4),
    ("fantastic", 2.6),
    ("fast", 1.2),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("flawless", 2.8),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("generous", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("gracious", 2.1),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressive", 2.3),
    ("incredible", 2.6),
    ("inviting", 1.9),
    ("kind", 2.4),
    ("knowledgeable", 1.8),
    ("like", 1.5),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("luxurious", 2.1),
    ("magnificent", 3.1),
    ("memorable", 1.9),
    ("modern", 0.9),
    ("nice", 1.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("polite", 2.1),
    ("professional", 1.6),
    ("prompt", 1.2),
    ("quick", 1.2),
    ("quiet", 1.2),
    ("recommend", 1.5),
    ("relaxing", 2.2),
    ("reliable", 1.6),
    ("responsive", 1.5),
    ("satisfied", 1.8),
    ("smooth", 1.2),
    ("spacious", 1.6),
    ("spectacular", 2.6),
    ("spotless", 2.0),
    ("stunning", 2.8),
    ("stylish", 1.6),
    ("superb", 3.1),
    ("tasty", 1.8),
    ("terrific", 2.8),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("welcoming", 2.1),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("abysmal", -3.0),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bedbugs", -2.5),
    ("bland", -1.0),
    ("boring", -1.3),
    ("broken", -2.1),
    ("bugs", -1.5),
    ("careless", -1.7),
    ("cheap", -0.5),
    ("cold", -0.5),
    ("complaint", -1.5),
    ("cramped", -1.6),
    ("crowded", -1.0),
    ("damaged", -1.9),
    ("dated", -0.8),
    ("delay", -1.3),
    ("delayed", -1.3),
    ("dingy", -1.8),
    ("dirtiest", -2.6),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.4),
    ("dreadful", -2.7),
    ("dusty", -1.1),
    ("expensive", -0.9),
    ("fail", -2.5),
    ("failed", -2.3),
    ("filthy", -2.5),
    ("frustrated", -2.2),
    ("frustrating", -2.0),
    ("gross", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("hostile", -2.4),
    ("ignored", -1.6),
    ("incompetent", -2.5),
    ("inconvenient", -1.5),
    ("leaking", -1.4),
    ("loud", -1.0),
    ("lousy", -2.5),
    ("mediocre", -1.0),
    ("mess", -1.5),
    ("messy", -1.5),
    ("miserable", -2.5),
    ("mold", -2.0),
    ("moldy", -2.2),
    ("nasty", -2.6),
    ("nightmare", -2.7),
    ("noisy", -0.7),
    ("outdated", -1.2),
    ("overcharged", -2.0),
    ("overpriced", -1.8),
    ("pathetic", -2.6),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("regret", -2.0),
    ("ripoff", -2.5),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.9),
    ("slow", -1.1),
    ("smelly", -2.0),
    ("stained", -1.5),
    ("stinks", -2.2),
    ("stuffy", -1.1),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("tiny", -0.6),
    ("unacceptable", -2.4),
    ("uncomfortable", -1.6),
    ("unfriendly", -1.5),
    ("unhelpful", -1.9),
    ("unpleasant", -2.1),
    ("unprofessional", -2.1),
    ("unsafe", -2.4),
    ("useless", -2.1),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worn", -0.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -2.7),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT),
    ("especially", BOOSTER_INCREMENT),
    ("exceptionally", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("remarkably", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("super", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("truly", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("barely", BOOSTER_DECREMENT),
    ("hardly", BOOSTER_DECREMENT),
    ("marginally", BOOSTER_DECREMENT),
    ("occasionally", BOOSTER_DECREMENT),
    ("partly", BOOSTER_DECREMENT),
    ("scarcely", BOOSTER_DECREMENT),
    ("slightly", BOOSTER_DECREMENT),
    ("somewhat", BOOSTER_DECREMENT),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nowhere", "neither", "nor", "cannot", "without",
    "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "cant", "couldnt", "wont",
    "wouldnt", "shouldnt", "hasnt", "havent", "hadnt",
];

/// Rule-based valence scorer.
///
/// Each word found in the lexicon contributes its valence, adjusted by up to
/// three preceding booster or negation words and by ALL-CAPS emphasis. Words
/// before a "but" count half, words after it count one and a half.
/// Exclamation marks push the total further from zero, and the sum is mapped
/// into `[-1, 1]` for the compound score.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON
                .iter()
                .map(|(word, valence)| (word.to_string(), *valence))
                .collect(),
            boosters: BOOSTERS
                .iter()
                .map(|(word, scalar)| (word.to_string(), *scalar))
                .collect(),
        }
    }

    /// Add or override lexicon entries. Words are matched lowercase.
    pub fn with_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        for (word, valence) in entries {
            self.lexicon.insert(word.into().to_lowercase(), valence);
        }
        self
    }

    fn token_valences(&self, tokens: &[Token], mixed_caps: bool) -> Vec<f64> {
        let mut valences = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let word = token.lower.as_str();
            if self.boosters.contains_key(word) || is_negation(word) {
                valences.push(0.0);
                continue;
            }
            let Some(&base) = self.lexicon.get(word) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;
            if mixed_caps && token.all_caps {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            let mut negated = false;
            for distance in 1..=3 {
                let Some(prev) = i.checked_sub(distance).map(|j| &tokens[j]) else {
                    break;
                };
                if let Some(&base) = self.boosters.get(prev.lower.as_str()) {
                    let mut scalar = if valence < 0.0 { -base } else { base };
                    if mixed_caps && prev.all_caps {
                        scalar += CAPS_INCREMENT.copysign(scalar);
                    }
                    let damping = match distance {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    valence += scalar * damping;
                }
                if is_negation(&prev.lower) {
                    negated = true;
                }
            }
            if negated {
                valence *= NEGATION_SCALAR;
            }
            valences.push(valence);
        }

        if let Some(pivot) = tokens.iter().position(|t| t.lower == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *valence *= 0.5;
                } else if i > pivot {
                    *valence *= 1.5;
                }
            }
        }
        valences
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScore::default();
        }
        let mixed_caps = tokens.iter().any(|t| t.all_caps) && tokens.iter().any(|t| !t.all_caps);
        let valences = self.token_valences(&tokens, mixed_caps);

        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
        let emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;

        let mut total: f64 = valences.iter().sum();
        if total > 0.0 {
            total += emphasis;
        } else if total < 0.0 {
            total -= emphasis;
        }

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for &valence in &valences {
            if valence > 0.0 {
                pos_sum += valence + 1.0;
            } else if valence < 0.0 {
                neg_sum += valence - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let denominator = pos_sum + neg_sum.abs() + neu_count;
        if denominator == 0.0 {
            return SentimentScore::default();
        }
        SentimentScore {
            neg: round_to(neg_sum.abs() / denominator, 3),
            neu: round_to(neu_count / denominator, 3),
            pos: round_to(pos_sum / denominator, 3),
            compound: round_to(normalize(total), 4),
        }
    }
}

struct Token {
    lower: String,
    all_caps: bool,
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|word| word.chars().count() > 1)
        .map(|word| {
            let mut letters = word.chars().filter(|c| c.is_alphabetic()).peekable();
            let all_caps = letters.peek().is_some() && letters.all(char::is_uppercase);
            Token {
                lower: word.to_lowercase().replace('\'', ""),
                all_caps,
            }
        })
        .collect()
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

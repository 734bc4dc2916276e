//! Rule-based task classifier
//!
//! Maps a question to a [`TaskClassification`] without any reasoning-agent
//! call. Every step is deterministic; classifying the same input twice
//! yields identical output.

use super::entities::{Domain, TaskClassification, TaskComplexity};
use super::keywords::{
    self, ADEQUACY, COMPLEX, COMPLEX_PHRASE, CONCRETE_CLASS, COST, CREATIVE, LOOKUP,
    NUMBER_WITH_UNIT, OPTIMIZATION, SIMPLE, VALIDATION_REQUEST,
};
use super::rfi;
use crate::core::question::Question;
use crate::core::request_context::RequestContext;
use crate::role::{Role, RoleInvocation, capabilities, capability};
use tracing::debug;

/// Highest temperature the classifier ever emits
pub const MAX_EMITTED_TEMPERATURE: f64 = 0.9;

/// Deterministic natural-language router
///
/// # Example
///
/// ```
/// use council_domain::{Domain, Question, Role, TaskClassifier, TaskComplexity};
///
/// let classifier = TaskClassifier::new();
/// let c = classifier.classify(&Question::new("What's the OTSKP code for concrete foundation?"), None);
///
/// assert_eq!(c.complexity, TaskComplexity::Simple);
/// assert!(c.has_domain(Domain::Codes));
/// assert!(!c.requires_rfi);
/// assert!(c.invocation(Role::CostEstimator).unwrap().temperature() <= 0.3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskClassifier;

impl TaskClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a question. Never fails: every rule degrades to a fallback.
    pub fn classify(
        &self,
        question: &Question,
        context: Option<&RequestContext>,
    ) -> TaskClassification {
        let text = question.normalized();
        let words = question.word_count();

        let detected = Self::detect_domains(&text);
        let defaulted = detected.is_empty();
        let domains = if defaulted {
            vec![Domain::Calculation]
        } else {
            detected
        };

        let complexity = Self::detect_complexity(&text, words, &domains);
        let (roles, none_selected) = Self::detect_roles(&text, &domains, complexity);
        let missing_data = rfi::missing_data(&text, &domains, context);

        let mut confidence: f64 = 1.0;
        if defaulted {
            confidence -= 0.2;
        }
        if none_selected {
            confidence -= 0.3;
        }
        if roles.len() > 4 {
            confidence -= 0.1;
        }

        debug!(
            complexity = %complexity,
            domains = ?domains,
            roles = ?roles.iter().map(|r| r.role().as_str()).collect::<Vec<_>>(),
            missing = missing_data.len(),
            "Classified question"
        );

        TaskClassification {
            complexity,
            domains,
            roles,
            requires_rfi: !missing_data.is_empty(),
            missing_data,
            confidence: round2(confidence.clamp(0.0, 1.0)),
        }
    }

    /// Domains whose keyword set matches, in canonical order.
    ///
    /// Empty when nothing matches; the caller applies the default.
    pub fn detect_domains(text: &str) -> Vec<Domain> {
        Domain::ALL
            .into_iter()
            .filter(|d| {
                keywords::domain_keywords(*d).is_match(text)
                    || (*d == Domain::Materials && CONCRETE_CLASS.is_match(text))
            })
            .collect()
    }

    /// Complexity by strict precedence; the first matching rule wins.
    pub fn detect_complexity(text: &str, words: usize, domains: &[Domain]) -> TaskComplexity {
        let has = |d: Domain| domains.contains(&d);

        if CREATIVE.is_match(text) {
            return TaskComplexity::Creative;
        }
        if COMPLEX.is_match(text) || COMPLEX_PHRASE.is_match(text) {
            return TaskComplexity::Complex;
        }
        if VALIDATION_REQUEST.is_match(text) {
            return TaskComplexity::Complex;
        }
        if SIMPLE.is_match(text) && words < 15 {
            return TaskComplexity::Simple;
        }
        if words <= 3 {
            return TaskComplexity::Simple;
        }
        if has(Domain::Calculation) && NUMBER_WITH_UNIT.is_match(text) && !has(Domain::Validation)
        {
            return TaskComplexity::Standard;
        }
        if domains.len() <= 2 && words < 12 && LOOKUP.is_match(text) {
            return TaskComplexity::Simple;
        }
        if domains.len() >= 4 || has(Domain::Validation) {
            return TaskComplexity::Complex;
        }
        if OPTIMIZATION.is_match(text) {
            return TaskComplexity::Creative;
        }
        TaskComplexity::Standard
    }

    /// Ordered, tuned role invocations plus whether scoring selected nothing
    /// (in which case a fallback role was used).
    fn detect_roles(
        text: &str,
        domains: &[Domain],
        complexity: TaskComplexity,
    ) -> (Vec<RoleInvocation>, bool) {
        let has = |d: Domain| domains.contains(&d);
        let compliance_last = complexity.requires_compliance_review();
        let mut selected: Vec<Role> = Vec::new();

        if has(Domain::Validation) {
            selected.push(Role::DocumentValidator);
        }

        let scores = Self::score_roles(text, domains);
        let mut ranked: Vec<(Role, u32)> = scores
            .into_iter()
            .filter(|(role, score)| {
                *score > 0
                    && !selected.contains(role)
                    && !(compliance_last && *role == Role::StandardsChecker)
            })
            .collect();
        // Stable: equal scores keep canonical role order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        selected.extend(ranked.into_iter().map(|(role, _)| role));

        let none_selected = selected.is_empty();
        if none_selected {
            let fallback = if COST.is_match(text) {
                Role::CostEstimator
            } else {
                Role::StructuralEngineer
            };
            selected.push(fallback);
        }

        if compliance_last && !selected.contains(&Role::StandardsChecker) {
            selected.push(Role::StandardsChecker);
        }

        let invocations = selected
            .into_iter()
            .enumerate()
            .map(|(priority, role)| {
                RoleInvocation::new(role, Self::temperature_for(role, complexity), priority as u32)
            })
            .collect();

        (invocations, none_selected)
    }

    /// Keyword score per role in canonical order
    pub fn score_roles(text: &str, domains: &[Domain]) -> Vec<(Role, u32)> {
        let has = |d: Domain| domains.contains(&d);
        let adequacy = ADEQUACY.is_match(text);

        capabilities()
            .iter()
            .map(|cap| {
                let mut score = cap.keywords.count_matches(text) as u32;
                score += match cap.role {
                    Role::ConcreteSpecialist if has(Domain::Materials) => 2,
                    Role::StandardsChecker if has(Domain::Standards) => 2,
                    _ => 0,
                };
                if has(Domain::Calculation)
                    && matches!(cap.role, Role::StructuralEngineer | Role::CostEstimator)
                {
                    score += 1;
                }
                if has(Domain::Codes) && cap.role == Role::CostEstimator {
                    score += 3;
                }
                if adequacy {
                    score += match cap.role {
                        Role::StructuralEngineer => 2,
                        Role::StandardsChecker => 1,
                        _ => 0,
                    };
                }
                (cap.role, score)
            })
            .collect()
    }

    /// `clamp(base + adjustment, 0, 0.9)`, rounded to two decimals
    pub fn temperature_for(role: Role, complexity: TaskComplexity) -> f64 {
        let raw = capability(role).base_temperature + complexity.temperature_adjustment();
        round2(raw.clamp(0.0, MAX_EMITTED_TEMPERATURE))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::rfi::MISSING_DIMENSIONS;

    fn classify(q: &str) -> TaskClassification {
        TaskClassifier::new().classify(&Question::new(q), None)
    }

    fn ordered_roles(c: &TaskClassification) -> Vec<Role> {
        c.roles_ordered().iter().map(|i| i.role()).collect()
    }

    // ==================== Scenarios ====================

    #[test]
    fn test_otskp_code_lookup() {
        let c = classify("What's the OTSKP code for concrete foundation?");
        assert_eq!(c.complexity, TaskComplexity::Simple);
        assert!(c.has_domain(Domain::Codes));
        assert!(c.invocation(Role::CostEstimator).unwrap().temperature() <= 0.3);
        assert_eq!(ordered_roles(&c)[0], Role::CostEstimator);
        assert!(!c.requires_rfi);
        assert!(c.missing_data.is_empty());
    }

    #[test]
    fn test_design_validation_request() {
        let c = classify("Check my foundation design for errors and compliance");
        assert_eq!(c.complexity, TaskComplexity::Complex);
        assert!(c.has_domain(Domain::Validation));
        let roles = c.roles_ordered();
        assert_eq!(roles[0].role(), Role::DocumentValidator);
        assert_eq!(roles[0].priority(), 0);
        assert_eq!(roles.last().unwrap().role(), Role::StandardsChecker);
    }

    // ==================== Domains ====================

    #[test]
    fn test_default_domain_lowers_confidence() {
        let c = classify("Hello there, can you help me today please?");
        assert_eq!(c.domains, vec![Domain::Calculation]);
        assert!(c.confidence <= 0.8);
    }

    #[test]
    fn test_czech_keywords_detect_domains() {
        let domains = TaskClassifier::detect_domains("jaký beton a výztuž pro základovou desku?");
        assert!(domains.contains(&Domain::Materials));
        assert!(domains.contains(&Domain::Design));
    }

    #[test]
    fn test_concrete_class_implies_materials() {
        let domains = TaskClassifier::detect_domains("is c30/37 fine here?");
        assert_eq!(domains, vec![Domain::Materials]);
    }

    // ==================== Complexity precedence ====================

    #[test]
    fn test_short_questions_are_simple() {
        for q in ["Concrete cover?", "OTSKP beton", "Slab thickness", "Rebar"] {
            assert_eq!(classify(q).complexity, TaskComplexity::Simple, "{}", q);
        }
    }

    #[test]
    fn test_three_word_validation_question_stays_complex() {
        // The validation rule precedes the word-count rule.
        let c = classify("Check design errors");
        assert_eq!(c.complexity, TaskComplexity::Complex);
    }

    #[test]
    fn test_three_word_creative_question_stays_creative() {
        let c = classify("Alternative foundation systems");
        assert_eq!(c.complexity, TaskComplexity::Creative);
    }

    #[test]
    fn test_calculation_with_units_is_standard() {
        let c = classify("Calculate the bending moment of a beam with span 6 m and load 25 kN/m");
        assert_eq!(c.complexity, TaskComplexity::Standard);
    }

    #[test]
    fn test_simple_keyword_ignored_for_long_questions() {
        let q = "What is the best way to calculate the reinforcement of a slab supported on four \
                 edges with openings near the columns and a cantilever";
        assert_ne!(classify(q).complexity, TaskComplexity::Simple);
    }

    #[test]
    fn test_optimization_is_creative() {
        let c = classify("How should we optimize the slab reinforcement layout overall");
        assert_eq!(c.complexity, TaskComplexity::Creative);
    }

    #[test]
    fn test_many_domains_is_complex() {
        let c = classify(
            "Concrete slab design load and price according to the standard for our office",
        );
        assert!(c.domains.len() >= 4);
        assert_eq!(c.complexity, TaskComplexity::Complex);
    }

    #[test]
    fn test_creative_beats_validation() {
        let c = classify("Check my design and propose an alternative solution with fewer errors");
        assert_eq!(c.complexity, TaskComplexity::Creative);
    }

    // ==================== Roles ====================

    #[test]
    fn test_validation_forces_document_validator_first() {
        for q in [
            "Verify the drawing for mistakes",
            "Zkontroluj chyby v projektu",
            "Please check the slab report for errors",
        ] {
            let c = classify(q);
            assert!(c.has_domain(Domain::Validation), "{}", q);
            let first = &c.roles_ordered()[0];
            assert_eq!(first.role(), Role::DocumentValidator, "{}", q);
            assert_eq!(first.priority(), 0, "{}", q);
        }
    }

    #[test]
    fn test_standards_checker_last_for_complex() {
        let c = classify(
            "Comprehensive analysis of concrete slab according to ČSN EN 1992 and cost",
        );
        assert_eq!(c.complexity, TaskComplexity::Complex);
        assert_eq!(ordered_roles(&c).last(), Some(&Role::StandardsChecker));
    }

    #[test]
    fn test_roles_are_unique() {
        let c = classify("Check concrete standard compliance of the slab design and its cost");
        let roles = ordered_roles(&c);
        for role in &roles {
            assert_eq!(roles.iter().filter(|r| *r == role).count(), 1);
        }
    }

    #[test]
    fn test_adequacy_phrasing_prefers_structural_engineer() {
        let c = classify("Is a 200 mm slab sufficient for a 5 m span?");
        assert_eq!(ordered_roles(&c)[0], Role::StructuralEngineer);
    }

    #[test]
    fn test_fallback_role_for_unmatched_question() {
        // Design domain, but no role keyword and no domain bonus.
        let c = classify("Tell me about this building structure");
        assert_eq!(c.domains, vec![Domain::Design]);
        assert_eq!(ordered_roles(&c), vec![Role::StructuralEngineer]);
        assert!(c.confidence <= 0.7);
    }

    #[test]
    fn test_all_roles_lower_confidence() {
        let c = classify(
            "Check the concrete slab design load, its price and ČSN standard compliance in the drawing",
        );
        assert_eq!(c.roles.len(), 5);
        assert!(c.confidence <= 0.9);
    }

    #[test]
    fn test_english_words_containing_czech_stems_do_not_route() {
        let c = classify("Which scenario governs the beam deflection here?");
        assert!(!c.has_domain(Domain::Codes));
        assert_eq!(ordered_roles(&c), vec![Role::StructuralEngineer]);

        assert!(TaskClassifier::detect_domains("estimate the lifespan of the desktop model").is_empty());
    }

    // ==================== Temperatures ====================

    #[test]
    fn test_temperature_bounds_for_all_combinations() {
        for complexity in [
            TaskComplexity::Simple,
            TaskComplexity::Standard,
            TaskComplexity::Complex,
            TaskComplexity::Creative,
        ] {
            for role in Role::ALL {
                let t = TaskClassifier::temperature_for(role, complexity);
                assert!((0.0..=MAX_EMITTED_TEMPERATURE).contains(&t), "{:?} {:?}", role, complexity);
            }
        }
    }

    #[test]
    fn test_temperature_adjustment() {
        assert_eq!(
            TaskClassifier::temperature_for(Role::StructuralEngineer, TaskComplexity::Creative),
            0.6
        );
        assert_eq!(
            TaskClassifier::temperature_for(Role::StandardsChecker, TaskComplexity::Simple),
            0.0
        );
    }

    // ==================== RFI ====================

    #[test]
    fn test_design_without_units_requires_rfi() {
        for q in [
            "Design the reinforcement for a retaining wall",
            "Calculate the load on the foundation footing",
            "Navrhni základovou patku pod sloup",
        ] {
            let c = classify(q);
            assert!(c.requires_rfi, "{}", q);
            assert!(c.missing_data.iter().any(|m| m == MISSING_DIMENSIONS), "{}", q);
        }
    }

    #[test]
    fn test_calculation_question_with_lookup_wording_requires_rfi() {
        let c = classify("What is the normal load on this slab?");
        assert!(!c.has_domain(Domain::Standards));
        assert!(c.has_domain(Domain::Calculation));
        assert!(c.requires_rfi);
        assert!(c.missing_data.iter().any(|m| m == MISSING_DIMENSIONS));
    }

    #[test]
    fn test_files_in_context_skip_rfi() {
        let ctx = RequestContext::with_files();
        let c = TaskClassifier::new()
            .classify(&Question::new("Design the reinforcement for a retaining wall"), Some(&ctx));
        assert!(!c.requires_rfi);
        assert!(c.missing_data.is_empty());
    }

    #[test]
    fn test_rfi_flag_matches_missing_data() {
        for q in [
            "Design a slab",
            "Design a 250 mm slab spanning 5 m",
            "What's the OTSKP code for concrete foundation?",
        ] {
            let c = classify(q);
            assert_eq!(c.requires_rfi, !c.missing_data.is_empty(), "{}", q);
        }
    }

    // ==================== Determinism ====================

    #[test]
    fn test_classification_is_idempotent() {
        let classifier = TaskClassifier::new();
        let q = Question::new("Check my foundation design for errors and compliance");
        assert_eq!(classifier.classify(&q, None), classifier.classify(&q, None));
    }

    #[test]
    fn test_confidence_in_unit_interval() {
        for q in ["x", "Design a slab", "Check concrete cost standard design load drawing"] {
            let c = classify(q);
            assert!((0.0..=1.0).contains(&c.confidence));
        }
    }
}

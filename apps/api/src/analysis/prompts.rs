// Prompt for the D.E.E.P. profile analysis.

/// Profile analysis prompt template. Replace `{profile_text}` before sending.
pub const PROFILE_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert in workforce development and AI-augmented learning strategies. Analyze the following LinkedIn profile and provide personalized guidance based on Pearson's D.E.E.P. Learning Framework.

The D.E.E.P. Framework consists of:

1. **DIAGNOSE**: Define task augmentation plans by understanding how AI will reshape specific roles and tasks
   - Conduct task-based analysis
   - Identify expert enthusiasts
   - Build augmentation squads
   - Identify and roll out use cases

2. **EMBED**: Instill effective learning seamlessly in the flow of work
   - Create and maintain a culture of learning
   - Embed learning in the flow of work
   - Enable social learning
   - Emphasize durable skills

3. **EVALUATE**: Measure progress toward an AI-augmented workforce
   - Build usable skills data infrastructure
   - Invest in ambient methods of skills assessment
   - Use AI to measure and personalize learning
   - Test and develop skills in authentic conditions

4. **PRIORITIZE**: Position learning as a strategic investment
   - Redefine L&D as capability curators
   - Prioritize investments around skills, not roles
   - Build a measurable skills ecosystem
   - Incentivize continuous, iterative learning

Based on this LinkedIn profile, provide:
1. A brief profile summary (name if available, current role, industry, years of experience estimate)
2. For EACH of the 4 D.E.E.P. pillars, provide:
   - 2-3 specific, actionable recommendations tailored to this person's background
   - Focus on practical steps they can take given their role and industry

LinkedIn Profile:
{profile_text}

Respond in this exact JSON format:
{
  "profileSummary": {
    "name": "Person's name or 'Professional'",
    "currentRole": "Their current job title",
    "industry": "Their industry",
    "experience": "Brief experience summary"
  },
  "diagnose": {
    "summary": "One sentence overview for this pillar",
    "recommendations": ["Recommendation 1", "Recommendation 2", "Recommendation 3"]
  },
  "embed": {
    "summary": "One sentence overview for this pillar",
    "recommendations": ["Recommendation 1", "Recommendation 2", "Recommendation 3"]
  },
  "evaluate": {
    "summary": "One sentence overview for this pillar",
    "recommendations": ["Recommendation 1", "Recommendation 2", "Recommendation 3"]
  },
  "prioritize": {
    "summary": "One sentence overview for this pillar",
    "recommendations": ["Recommendation 1", "Recommendation 2", "Recommendation 3"]
  }
}"#;

pub fn build_analysis_prompt(profile_text: &str) -> String {
    PROFILE_ANALYSIS_PROMPT_TEMPLATE.replace("{profile_text}", profile_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_single_slot() {
        assert_eq!(
            PROFILE_ANALYSIS_PROMPT_TEMPLATE
                .matches("{profile_text}")
                .count(),
            1
        );
    }

    #[test]
    fn test_prompt_names_all_pillars() {
        let prompt = build_analysis_prompt("Jane Doe, Engineer");
        for pillar in ["DIAGNOSE", "EMBED", "EVALUATE", "PRIORITIZE"] {
            assert!(prompt.contains(&format!("**{pillar}**")), "missing {pillar}");
        }
        for key in ["\"diagnose\"", "\"embed\"", "\"evaluate\"", "\"prioritize\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_profile_text_is_interpolated_verbatim() {
        let profile = "Jane Doe\nStaff Engineer at {Acme}\n10 years";
        let prompt = build_analysis_prompt(profile);
        assert!(prompt.contains("LinkedIn Profile:\nJane Doe\nStaff Engineer at {Acme}\n10 years\n"));
        assert!(!prompt.contains("{profile_text}"));
    }
}

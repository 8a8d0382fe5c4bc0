//! Section templates per document type.

use synthgen_core::DocType;

/// One named section and the instruction used to prompt for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTemplate {
    /// Section heading
    pub name: &'static str,
    /// Writing instruction sent to the model
    pub instruction: &'static str,
}

const fn section(name: &'static str, instruction: &'static str) -> SectionTemplate {
    SectionTemplate { name, instruction }
}

const WHITEPAPER: &[SectionTemplate] = &[
    section("Executive Summary", "Write an executive summary covering the key findings and recommendations"),
    section("Introduction and Background", "Write an introduction covering background, context, and why the topic matters"),
    section("Technical Analysis", "Write an in-depth technical analysis with detailed explanations and specifications"),
    section("Methodology", "Describe the approaches, frameworks, and strategies used"),
    section("Implementation Details", "Describe implementation step by step, including technical requirements"),
    section("Results and Findings", "Present results and findings with data analysis and performance metrics"),
    section("Future Considerations", "Discuss future implications, scalability, and how the technology may evolve"),
    section("Conclusions and References", "Write conclusions with actionable recommendations and references"),
];

const ARTICLE: &[SectionTemplate] = &[
    section("Introduction", "Write an engaging introduction that sets the context for the reader"),
    section("Main Analysis", "Write the main analysis with thorough, detailed examination"),
    section("Case Studies and Examples", "Describe case studies and real-world examples with specific scenarios"),
    section("Industry Impact and Implications", "Discuss industry impact, market implications, and economic effects"),
    section("Current Trends and Developments", "Describe current trends, recent developments, and emerging patterns"),
    section("Best Practices and Recommendations", "Describe best practices and actionable recommendations"),
    section("Future Outlook", "Discuss future trends, predictions, and long-term implications"),
    section("Conclusion", "Write a conclusion that summarizes the key points"),
];

const REPORT: &[SectionTemplate] = &[
    section("Executive Summary", "Write an executive summary with key findings, recommendations, and critical insights"),
    section("Introduction and Methodology", "Describe scope, objectives, and the methodology used"),
    section("Market Analysis", "Analyze market size, trends, competitors, and opportunities"),
    section("Data Analysis and Insights", "Present data analysis with statistical insights and interpretation"),
    section("Strategic Recommendations", "Give strategic recommendations with implementation guidance"),
    section("Risk Assessment", "Assess risks, likely challenges, and mitigation strategies"),
    section("Implementation Plan", "Lay out an implementation plan with timelines, resources, and success metrics"),
    section("Conclusions and Next Steps", "Write conclusions with clear next steps and action items"),
];

const PROPOSAL: &[SectionTemplate] = &[
    section("Project Overview and Objectives", "Describe the project goals, scope, and strategic alignment"),
    section("Scope and Requirements", "Define the scope and analyze the requirements"),
    section("Timeline and Milestones", "Lay out the timeline with milestones and deliverable schedules"),
    section("Budget and Resource Allocation", "Break down the budget and resource allocation"),
    section("Implementation Strategy", "Describe the implementation strategy and approach"),
    section("Risk Analysis and Mitigation", "Analyze risks and describe mitigation strategies"),
    section("Team and Expertise", "Describe team composition, expertise, and organizational capabilities"),
    section("Quality Assurance", "Describe quality assurance, testing, and validation procedures"),
    section("Expected Outcomes and Success Metrics", "Describe expected outcomes, success criteria, and how they are measured"),
];

const DESIGN: &[SectionTemplate] = &[
    section("System Overview and Architecture", "Describe the high-level architecture and design principles"),
    section("Technical Requirements", "Specify functional and non-functional requirements"),
    section("Interface Design and User Experience", "Describe interface design, user experience, and interaction patterns"),
    section("Data Architecture and Flow", "Describe data architecture, database design, and information flow"),
    section("Security and Performance", "Describe security considerations, performance requirements, and scalability"),
    section("Implementation Details", "Specify implementation technologies and frameworks"),
    section("Testing and Quality Assurance", "Describe testing strategies and validation methods"),
    section("Deployment and Infrastructure", "Describe deployment architecture and infrastructure requirements"),
    section("Maintenance and Support", "Describe maintenance procedures, support processes, and long-term sustainability"),
];

/// The fixed section plan for a document type.
///
/// # Examples
///
/// ```
/// use synthgen_core::DocType;
/// use synthgen_pipeline::section_templates;
///
/// assert_eq!(section_templates(DocType::Report).len(), 8);
/// assert_eq!(section_templates(DocType::Report)[0].name, "Executive Summary");
/// ```
pub fn section_templates(doc_type: DocType) -> &'static [SectionTemplate] {
    match doc_type {
        DocType::Whitepaper => WHITEPAPER,
        DocType::Article => ARTICLE,
        DocType::Report => REPORT,
        DocType::Proposal => PROPOSAL,
        DocType::Design => DESIGN,
    }
}

/// Looks up the writing instruction for a named section.
pub fn section_instruction(doc_type: DocType, section_name: &str) -> Option<&'static str> {
    section_templates(doc_type)
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(section_name))
        .map(|t| t.instruction)
}

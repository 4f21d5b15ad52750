//! Prompt templates for the analysis tasks

/// Templates for generating the prompt of each task
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking for a sectioned, bulleted summary of the whole document
    pub fn summary(text: &str) -> String {
        format!(
            r#"Please provide a comprehensive, detailed analysis and summary of the following text. Make sure to cover ALL aspects thoroughly and provide a complete analysis. Structure your response with clear sections and bullet points to make it easy to read and understand. Include:

**MAIN TOPIC & KEY THEMES**
• [List 5-7 main themes with detailed bullet points explaining each theme]

**IMPORTANT DETAILS & SUPPORTING INFORMATION**
• [Key supporting information with detailed bullet points]
• [Specific examples, data, or evidence mentioned]
• [Important context and background information]

**KEY INSIGHTS & IMPLICATIONS**
• [Notable findings and their significance with detailed bullet points]
• [What these insights mean for the reader]
• [Potential impact or consequences]

**PATTERNS & TRENDS**
• [Any recurring patterns or trends with detailed bullet points]
• [Connections between different parts of the content]
• [Underlying themes or motifs]

**PRACTICAL RECOMMENDATIONS & NEXT STEPS**
• [Actionable recommendations with detailed bullet points]
• [What the reader should consider or do next]
• [Key takeaways for practical application]

**CONCLUSION & SUMMARY**
• [A comprehensive wrap-up of the main points]
• [Final thoughts and overall assessment]

IMPORTANT: Please ensure your analysis is complete and thorough. Do not cut off mid-sentence or leave sections incomplete. Provide detailed explanations for each point.

Text to analyze:
{}

Please format your response with clear section headers and bullet points for easy reading. Make sure to complete the entire analysis:"#,
            text
        )
    }

    /// Prompt asking for a one-word sentiment label
    pub fn sentiment(context: &str) -> String {
        format!(
            "Analyze the sentiment of the following text and respond with only one word (positive, negative, or neutral):\n\n{}",
            context
        )
    }

    /// Prompt asking one question against the shared context
    pub fn question(context: &str, question: &str) -> String {
        format!(
            "Please answer the question based on the context provided. Context: {}\n\nQuestion: {}\nAnswer:",
            context, question
        )
    }
}

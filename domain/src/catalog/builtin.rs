//! Built-in diagnostic tools
//!
//! The three diagnostics that ship with the application. Question order is
//! load-bearing: answers are keyed by position, so these lists must not be
//! reordered.

use super::tool::DiagnosticTool;

/// Name of the data hygiene diagnostic
pub const DATA_HYGIENE: &str = "Data Hygiene & Business Clarity Diagnostic";

/// Name of the marketing effectiveness diagnostic
pub const MARKETING: &str = "Marketing Effectiveness Diagnostic";

/// Name of the cash flow diagnostic
pub const CASH_FLOW: &str = "Cash Flow & Financial Clarity Diagnostic";

/// Build the built-in tool set in picker order
pub fn builtin_tools() -> Vec<DiagnosticTool> {
    vec![
        DiagnosticTool::new(
            DATA_HYGIENE,
            "Diagnose issues with business data, systems, and flow to improve operational efficiency.",
            vec![
                "Do you have a centralized place where you keep all your customer or business information?".into(),
                "Do you track sales, expenses, and customer info in one integrated system?".into(),
                "Is it challenging to keep your business data organized and under control?".into(),
                "Do you have to enter the same information into multiple systems?".into(),
                "Do your business tools (sales, inventory, accounting) communicate with each other?".into(),
                "Do you have unused data sitting around that could provide valuable insights?".into(),
                "Is it difficult to find or understand your historical business information?".into(),
                "Do you use dedicated tools to understand your money flow and budget?".into(),
                "Do your business reports sometimes contain errors or missing information?".into(),
                "Do you use a systematic approach to track and manage customer leads?".into(),
            ],
        ),
        DiagnosticTool::new(
            MARKETING,
            "Understand your customer feedback, digital reach, and campaign clarity for better ROI.",
            vec![
                "Is it difficult to measure if your advertising or email campaigns are working?".into(),
                "Do you use digital tools to target specific customer segments effectively?".into(),
                "Do you actively track and respond to customer feedback and complaints?".into(),
                "Have you analyzed how customers find you and optimized your marketing accordingly?".into(),
                "Do you regularly gather customer feedback to improve your products or services?".into(),
                "Do you research competitor pricing before setting your own prices?".into(),
                "Do you consistently monitor and respond to online reviews?".into(),
                "Do you have a systematic process for collecting customer feedback?".into(),
                "Is your brand message clear and consistent across all channels?".into(),
                "Have you clearly identified and defined your ideal customer profile?".into(),
            ],
        ),
        DiagnosticTool::new(
            CASH_FLOW,
            "Spot inconsistencies and inefficiencies in financial operations and planning.",
            vec![
                "Do you have a detailed forecast for your next 3 months of cash flow?".into(),
                "Do you systematically track overdue payments and follow up automatically?".into(),
                "Can you easily determine when you can afford a new hire or major expense?".into(),
                "Do you reconcile your financial records on a monthly basis?".into(),
                "Do you regularly analyze income vs. expenses to identify trends?".into(),
                "Are your vendors and contractors consistently paid on time?".into(),
                "Is your profit margin consistent across different products or services?".into(),
                "Do you maintain a financial buffer for unexpected expenses or emergencies?".into(),
                "Can you access your financial data from anywhere when needed?".into(),
                "Do you generate comprehensive monthly financial reports automatically?".into(),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_builtin_tools() {
        let tools = builtin_tools();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0].name(), DATA_HYGIENE);
        assert_eq!(tools[1].name(), MARKETING);
        assert_eq!(tools[2].name(), CASH_FLOW);
    }

    #[test]
    fn test_each_tool_has_ten_questions() {
        for tool in builtin_tools() {
            assert_eq!(tool.question_count(), 10, "{}", tool.name());
        }
    }

    #[test]
    fn test_builtin_tools_validate_clean() {
        for tool in builtin_tools() {
            assert!(tool.validate().is_empty(), "{}", tool.name());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let tools = builtin_tools();
        let mut names: Vec<_> = tools.iter().map(|t| t.name()).collect();
        names.dedup();
        assert_eq!(names.len(), tools.len());
    }
}

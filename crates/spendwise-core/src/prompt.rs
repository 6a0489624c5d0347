//! Prompt construction for the expense report
//!
//! The prompt is a pure function of (income, expense text): same inputs,
//! same bytes. The instruction text is Vietnamese because the advisor is a
//! Vietnamese-facing product; the requested output is a Markdown table with
//! an STT / Nội dung / Số tiền breakdown plus computed totals.

/// Build the single instruction sent to the generation service.
///
/// Embeds the income (VNĐ), the raw expense text, and the formatting
/// instructions for an itemized table with total and remaining balance.
pub fn build_report_prompt(income: u64, expenses: &str) -> String {
    format!(
        "Bạn là chuyên gia tài chính. Thu nhập: {income} VNĐ.\n\
         Dữ liệu chi tiêu: {expenses}.\n\
         Hãy tạo bảng thống kê gồm: STT, Nội dung, Số tiền (VNĐ).\n\
         Sau đó tính: Tổng chi và Số tiền dư còn lại.\n\
         Trả về dưới dạng bảng Markdown rõ ràng."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_report_prompt(10_000_000, "Tiền nhà 5tr, Ăn sáng 30k");
        let b = build_report_prompt(10_000_000, "Tiền nhà 5tr, Ăn sáng 30k");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_embeds_both_inputs() {
        let prompt = build_report_prompt(10_000_000, "Tiền nhà 5tr, Ăn sáng 30k");
        assert!(prompt.contains("10000000"));
        assert!(prompt.contains("Tiền nhà 5tr, Ăn sáng 30k"));
    }

    #[test]
    fn test_prompt_requests_markdown_table() {
        let prompt = build_report_prompt(0, "Cà phê 25k");
        assert!(prompt.contains("STT"));
        assert!(prompt.contains("Số tiền"));
        assert!(prompt.contains("Tổng chi"));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn test_prompt_differs_for_different_income() {
        let a = build_report_prompt(1_000_000, "Ăn trưa 50k");
        let b = build_report_prompt(2_000_000, "Ăn trưa 50k");
        assert_ne!(a, b);
    }
}

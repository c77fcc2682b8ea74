//! Canned Markdown shown by widgets that have no explicit content.
//!
//! Each text size maps to a fixed default, escalating from a single
//! heading to a multi-section report with lists and tables.

use super::model::TextSize;

const XS: &str = "# Small note\nJust a brief point.";

const SM: &str = "# Brief Message\nThis is a quick update with a simple point.";

const MD: &str = "\
# Medium Update
This is a medium-length update that includes some structured content.

## Key Points
* First important point
* Second key detail
* Final consideration

| Column 1 | Column 2 |
|----------|-----------|
| Data 1   | Value 1   |
| Data 2   | Value 2   |";

const LG: &str = "\
# Detailed Report
## Introduction
This is a comprehensive report that contains multiple sections and detailed information.

### Key Findings
1. First major finding with supporting details
2. Second significant observation
3. Additional important notes

## Data Analysis
| Metric | Value | Change |
|--------|--------|--------|
| Users  | 1,234  | +15%   |
| Time   | 45min  | -5%    |
| Score  | 4.8    | +0.3   |

### Conclusions
Final thoughts and recommendations based on the analysis above.";

const XL: &str = "\
# Comprehensive Analysis Report
## Executive Summary
This extensive report provides a detailed analysis of our findings with multiple sections, tables, and structured content.

## Background
Detailed context and background information for this analysis...

## Methodology
### Data Collection
* Primary research methods
* Secondary data sources
* Validation procedures

### Analysis Framework
1. Initial data processing
2. Statistical analysis
3. Validation steps

## Detailed Findings
### Primary Results
| Category | Result | Confidence |
|----------|--------|------------|
| Type A   | 85%    | High       |
| Type B   | 72%    | Medium     |
| Type C   | 93%    | Very High  |

### Secondary Observations
* Key observation 1 with extended explanation
* Key observation 2 with supporting data
* Key observation 3 with implications

## Recommendations
1. First major recommendation with implementation details
2. Second key suggestion with timeline
3. Final recommendation with resource requirements

## Conclusion
Summary of all findings and next steps...";

/// Returns the default Markdown body for a text size.
pub fn content_for(size: TextSize) -> &'static str {
    match size {
        TextSize::Xs => XS,
        TextSize::Sm => SM,
        TextSize::Md => MD,
        TextSize::Lg => LG,
        TextSize::Xl => XL,
    }
}

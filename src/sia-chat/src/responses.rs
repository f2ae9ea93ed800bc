//! Canned response catalog.
//!
//! The widget has no backend; replies come from a pattern-matching lookup
//! over the lowercased user input. Preset queries get a staged reply
//! (thinking steps, then a long answer with citations); a handful of small
//! talk patterns get a direct reply behind the typing indicator; anything
//! else echoes the input back. The catalog can be swapped wholesale by
//! deserializing a JSON document, which is how deployments replace the
//! built-in HR content.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A reply produced by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    /// Shown with the staged thinking timeline before the body streams.
    Staged {
        steps: Vec<String>,
        body: String,
        #[serde(default)]
        sources: Vec<u32>,
    },
    /// Shown behind the typing indicator, then streamed.
    Direct {
        body: String,
        #[serde(default)]
        sources: Vec<u32>,
    },
}

impl Reply {
    /// Returns the reply body.
    pub fn body(&self) -> &str {
        match self {
            Self::Staged { body, .. } | Self::Direct { body, .. } => body,
        }
    }

    /// Returns the citation indices.
    pub fn sources(&self) -> &[u32] {
        match self {
            Self::Staged { sources, .. } | Self::Direct { sources, .. } => sources,
        }
    }
}

/// One lookup rule.
///
/// A rule matches when every phrase in `match_all` occurs in the lowercased
/// input and, if `match_any` is non-empty, at least one of its phrases does
/// too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRule {
    #[serde(default)]
    pub match_all: Vec<String>,
    #[serde(default)]
    pub match_any: Vec<String>,
    pub reply: Reply,
}

impl CatalogRule {
    fn matches(&self, input: &str) -> bool {
        self.match_all.iter().all(|p| input.contains(p.as_str()))
            && (self.match_any.is_empty()
                || self.match_any.iter().any(|p| input.contains(p.as_str())))
    }
}

/// Ordered rule list; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCatalog {
    rules: Vec<CatalogRule>,
}

impl ResponseCatalog {
    /// Creates a catalog from an explicit rule list.
    pub fn new(rules: Vec<CatalogRule>) -> Self {
        Self { rules }
    }

    /// Loads a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Looks up the reply for a raw user input.
    ///
    /// Matching is case-insensitive; unmatched input echoes back.
    pub fn lookup(&self, input: &str) -> Reply {
        let lowered = input.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&lowered) {
                return rule.reply.clone();
            }
        }
        Reply::Direct {
            body: format!(
                "I understand you said: \"{input}\". This is a simulated response. \
                 In a real implementation, this would connect to an AI service."
            ),
            sources: Vec::new(),
        }
    }

    /// The built-in HR assistant content.
    pub fn builtin() -> Self {
        let rules = vec![
            CatalogRule {
                match_all: vec![
                    "job description".to_string(),
                    "senior software engineer".to_string(),
                ],
                match_any: Vec::new(),
                reply: Reply::Staged {
                    steps: vec![
                        "Looking into company job description templates...".to_string(),
                        "Reviewing similar roles and requirements...".to_string(),
                        "Compiling best practices for technical roles...".to_string(),
                    ],
                    body: JOB_DESCRIPTION_BODY.to_string(),
                    sources: vec![3],
                },
            },
            CatalogRule {
                match_all: Vec::new(),
                match_any: vec!["performance review".to_string()],
                reply: Reply::Staged {
                    steps: vec![
                        "Accessing company performance review guidelines...".to_string(),
                        "Reviewing HR best practices and frameworks...".to_string(),
                        "Compiling recommendations based on industry standards...".to_string(),
                    ],
                    body: PERFORMANCE_REVIEW_BODY.to_string(),
                    sources: vec![4, 6],
                },
            },
            CatalogRule {
                match_all: Vec::new(),
                match_any: vec!["onboarding checklist".to_string(), "onboarding".to_string()],
                reply: Reply::Staged {
                    steps: vec![
                        "Reviewing company onboarding procedures...".to_string(),
                        "Checking standard checklist templates...".to_string(),
                        "Customizing checklist for new employee needs...".to_string(),
                    ],
                    body: ONBOARDING_BODY.to_string(),
                    sources: vec![5],
                },
            },
            CatalogRule {
                match_all: Vec::new(),
                match_any: vec!["hello".to_string(), "hi".to_string()],
                reply: Reply::Direct {
                    body: "Hello! Nice to meet you. How can I assist you today?".to_string(),
                    sources: Vec::new(),
                },
            },
            CatalogRule {
                match_all: vec!["help".to_string()],
                match_any: Vec::new(),
                reply: Reply::Direct {
                    body: "I'm here to help! Feel free to ask me anything, and I'll do my \
                           best to assist you."
                        .to_string(),
                    sources: Vec::new(),
                },
            },
            CatalogRule {
                match_all: vec!["thank".to_string()],
                match_any: Vec::new(),
                reply: Reply::Direct {
                    body: "You're welcome! Is there anything else I can help you with?"
                        .to_string(),
                    sources: Vec::new(),
                },
            },
            CatalogRule {
                match_all: Vec::new(),
                match_any: vec!["vacation".to_string(), "days".to_string()],
                reply: Reply::Direct {
                    body: VACATION_BODY.to_string(),
                    sources: vec![1, 2],
                },
            },
        ];
        Self { rules }
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const JOB_DESCRIPTION_BODY: &str = r"Here's a draft job description for a Senior Software Engineer position:

**Job Title:** Senior Software Engineer

**Department:** Engineering

**Reports To:** Engineering Manager

**Job Summary:**
We're looking for an experienced Senior Software Engineer to join our engineering team. You'll be responsible for designing, developing, and maintaining scalable software solutions while mentoring junior engineers and contributing to technical decision-making.

**Key Responsibilities:**
• Design and develop high-quality, scalable software solutions
• Lead technical architecture decisions and code reviews
• Mentor junior engineers and contribute to team growth
• Collaborate with cross-functional teams to deliver features
• Write clean, maintainable, and well-documented code
• Participate in agile development processes

**Required Qualifications:**
• 5+ years of software development experience
• Strong proficiency in [relevant technologies]
• Experience with system design and architecture
• Excellent problem-solving and communication skills

Would you like me to customize any specific sections or add more details?¹";

const PERFORMANCE_REVIEW_BODY: &str = r"Here are the best practices for conducting performance reviews:

**1. Preparation is Key**
• Review the employee's goals, achievements, and previous feedback
• Gather input from colleagues and stakeholders
• Prepare specific examples of performance

**2. Create a Safe Environment**
• Schedule in advance and choose a private, comfortable location
• Start with positive feedback to set a constructive tone
• Encourage two-way dialogue

**3. Use the SBI Framework**
• **Situation:** Describe the specific context
• **Behavior:** Focus on observable actions, not personality
• **Impact:** Explain the effect on team/company

**4. Set Clear Goals**
• Establish SMART goals (Specific, Measurable, Achievable, Relevant, Time-bound)
• Align goals with company objectives
• Create development plans for growth areas

**5. Follow Up**
• Document the discussion and action items
• Schedule regular check-ins (not just annual reviews)
• Provide ongoing feedback and support

**Additional Tips:**
• Be specific and objective
• Focus on growth and development
• Address issues promptly, don't wait for review cycles
• Celebrate achievements and recognize contributions

Would you like templates or specific frameworks for your organization?¹²";

const ONBOARDING_BODY: &str = r"Here's a comprehensive onboarding checklist for new employees:

**Pre-Arrival (Before Day 1)**
☐ Send welcome email with first-day details
☐ Prepare workspace and equipment
☐ Set up accounts and access (email, systems, tools)
☐ Assign a buddy or mentor
☐ Prepare onboarding materials and documentation

**Day 1**
☐ Welcome meeting with manager
☐ Office tour and introductions
☐ Complete HR paperwork and benefits enrollment
☐ IT setup: computer, accounts, software access
☐ Review company handbook and policies
☐ Set up payroll and direct deposit

**Week 1**
☐ Team introductions and meet-and-greets
☐ Review job description and expectations
☐ Set initial goals and priorities
☐ Training on key tools and systems
☐ Schedule regular check-ins
☐ Assign first projects/tasks

**Month 1**
☐ Complete mandatory training courses
☐ Performance expectations discussion
☐ Feedback session with manager
☐ Integration into team workflows
☐ Review company culture and values
☐ Connect with key stakeholders

**Ongoing (First 90 Days)**
☐ Regular 1-on-1 meetings
☐ Progress reviews and feedback
☐ Professional development planning
☐ Social integration and team building

Would you like me to customize this for a specific role or department?¹";

const VACATION_BODY: &str = "I can help with that. Based on my records¹, you currently have \
**14 vacation days remaining** for this year. \u{1F334} Did you know that you have two \
activity days per year to use as vacation as well?² If you have any further questions or \
need to request time off, feel free to ask or use the vacation request form here. \
Have a great day! \u{1F60A}";

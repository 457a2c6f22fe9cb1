//! Built-in catalog tables
//!
//! Declaration order matters: lists shown to the user and filtered guardrail
//! sequences follow the order of these tables.

use super::{CodeExample, DataCategory, Guardrail, ProjectType, Recommendation, Technology};
use crate::types::{Priority, RiskLevel, TechCategory};

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn tech(id: &str, name: &str, category: TechCategory) -> Technology {
    Technology {
        id: id.to_string(),
        name: name.to_string(),
        category,
    }
}

fn data(id: &str, name: &str, description: &str, risk_level: RiskLevel, default_selected: bool) -> DataCategory {
    DataCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        risk_level,
        default_selected,
    }
}

fn project(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    recommended_technologies: &[&str],
    common_data_types: &[&str],
) -> ProjectType {
    ProjectType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        recommended_technologies: ids(recommended_technologies),
        common_data_types: ids(common_data_types),
    }
}

fn rec(
    title: &str,
    description: &str,
    priority: Priority,
    relevant_technologies: Option<&[&str]>,
    relevant_data_types: Option<&[&str]>,
) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        priority,
        relevant_technologies: relevant_technologies.map(ids),
        relevant_data_types: relevant_data_types.map(ids),
    }
}

fn example(language: &str, bad: &str, good: &str, explanation: &str) -> CodeExample {
    CodeExample {
        language: language.to_string(),
        bad: bad.to_string(),
        good: good.to_string(),
        explanation: explanation.to_string(),
    }
}

pub(super) fn technologies() -> Vec<Technology> {
    use TechCategory::*;
    vec![
        tech("react", "React", Frontend),
        tech("angular", "Angular", Frontend),
        tech("vue", "Vue.js", Frontend),
        tech("nodejs", "Node.js", Backend),
        tech("express", "Express.js", Backend),
        tech("django", "Django", Backend),
        tech("flask", "Flask", Backend),
        tech("php", "PHP", Backend),
        tech("laravel", "Laravel", Backend),
        tech("mysql", "MySQL", Database),
        tech("postgresql", "PostgreSQL", Database),
        tech("mongodb", "MongoDB", Database),
        tech("reactnative", "React Native", Mobile),
        tech("flutter", "Flutter", Mobile),
        tech("swift", "Swift", Mobile),
        tech("kotlin", "Kotlin", Mobile),
    ]
}

pub(super) fn data_types() -> Vec<DataCategory> {
    vec![
        data(
            "user_accounts",
            "User Accounts",
            "Personal information and login credentials",
            RiskLevel::High,
            true,
        ),
        data(
            "payment_info",
            "Payment Information",
            "Credit cards and payment processing data",
            RiskLevel::High,
            false,
        ),
        data(
            "pii",
            "Personal Identifiable Information",
            "Names, addresses, SSNs, etc.",
            RiskLevel::High,
            false,
        ),
        data(
            "medical",
            "Medical Information",
            "Health records and medical data",
            RiskLevel::High,
            false,
        ),
        data(
            "content",
            "User Generated Content",
            "Posts, comments, and uploads",
            RiskLevel::Medium,
            false,
        ),
        data(
            "analytics",
            "Analytics Data",
            "Usage patterns and metrics",
            RiskLevel::Low,
            false,
        ),
    ]
}

pub(super) fn project_types() -> Vec<ProjectType> {
    vec![
        project(
            "website",
            "Website",
            "Static or dynamic website with public content",
            "🌐",
            &["react", "angular", "vue"],
            &["analytics", "content"],
        ),
        project(
            "saas",
            "SaaS Application",
            "Subscription-based software service",
            "☁️",
            &["react", "angular", "nodejs", "postgresql"],
            &["user_accounts", "payment_info", "content"],
        ),
        project(
            "api",
            "API Service",
            "Backend service providing data to other applications",
            "⚙️",
            &["nodejs", "express", "django", "postgresql", "mongodb"],
            &["user_accounts", "analytics"],
        ),
        project(
            "mobile",
            "Mobile Application",
            "iOS or Android application",
            "📱",
            &["reactnative", "flutter", "swift", "kotlin"],
            &["user_accounts", "content", "analytics"],
        ),
        project(
            "ecommerce",
            "E-Commerce",
            "Online store or marketplace",
            "🛒",
            &["react", "nodejs", "mysql", "postgresql"],
            &["user_accounts", "payment_info", "pii"],
        ),
    ]
}

const ALL_PROJECTS: &[&str] = &["website", "saas", "api", "mobile", "ecommerce"];

pub(super) fn guardrails() -> Vec<Guardrail> {
    vec![
        authentication(),
        api_security(),
        database_security(),
        input_validation(),
        general_security(),
    ]
}

fn authentication() -> Guardrail {
    Guardrail {
        id: "authentication".to_string(),
        title: "Authentication Security".to_string(),
        description: "Ensures your users' accounts remain secure through proper credential handling and session management.".to_string(),
        icon: "🔐".to_string(),
        project_types: ids(ALL_PROJECTS),
        recommendations: vec![
            rec(
                "Use password hashing",
                "Never store passwords as plain text. Always use strong hashing algorithms like bcrypt or Argon2.",
                Priority::High,
                Some(&["nodejs", "django", "php", "laravel"]),
                Some(&["user_accounts"]),
            ),
            rec(
                "Implement multi-factor authentication",
                "Add an extra layer of security by requiring a second form of verification beyond passwords.",
                Priority::Medium,
                None,
                Some(&["user_accounts", "payment_info", "pii", "medical"]),
            ),
            rec(
                "Use secure session management",
                "Set proper cookie attributes (HttpOnly, Secure, SameSite) and implement token rotation.",
                Priority::High,
                Some(&["nodejs", "express", "django", "php", "laravel"]),
                None,
            ),
        ],
        code_examples: vec![example(
            "javascript",
            r#"// NEVER do this
function storePassword(username, password) {
  // Store plain text password directly in database
  db.users.insert({ username, password });
}"#,
            r#"// Do this instead
const bcrypt = require('bcrypt');

async function storePassword(username, password) {
  // Hash password before storing
  const saltRounds = 10;
  const hashedPassword = await bcrypt.hash(password, saltRounds);
  db.users.insert({ username, password: hashedPassword });
}"#,
            "The secure version uses bcrypt to hash passwords before storing them in the database. This ensures that even if your database is compromised, the actual passwords remain protected.",
        )],
    }
}

fn api_security() -> Guardrail {
    Guardrail {
        id: "api_security".to_string(),
        title: "API Security".to_string(),
        description: "Protects your application's data exchange channels from unauthorized access and abuse.".to_string(),
        icon: "🔌".to_string(),
        project_types: ids(&["saas", "api", "mobile", "ecommerce"]),
        recommendations: vec![
            rec(
                "Implement rate limiting",
                "Prevent abuse by limiting how many requests a client can make in a given timeframe.",
                Priority::Medium,
                Some(&["nodejs", "express", "django", "flask", "laravel"]),
                None,
            ),
            rec(
                "Use proper authentication for APIs",
                "Implement JWT or OAuth for stateless authentication of API requests.",
                Priority::High,
                Some(&["nodejs", "express", "django", "flask", "php"]),
                None,
            ),
            rec(
                "Validate and sanitize all inputs",
                "Never trust client-provided data; always validate and sanitize it on the server.",
                Priority::High,
                None,
                None,
            ),
        ],
        code_examples: vec![example(
            "javascript",
            r#"// NEVER do this
app.get('/api/users/:id', (req, res) => {
  // No authentication check before providing sensitive data
  const userData = getUserById(req.params.id);
  res.json(userData);
});"#,
            r#"// Do this instead
app.get('/api/users/:id', authenticateToken, (req, res) => {
  // Verify the authenticated user can access this data
  if (req.user.id !== req.params.id && !req.user.isAdmin) {
    return res.status(403).json({ error: 'Access denied' });
  }

  const userData = getUserById(req.params.id);
  res.json(userData);
});"#,
            "The secure version ensures the requester is authenticated and authorized to access the specific user data they're requesting, preventing unauthorized access to sensitive information.",
        )],
    }
}

fn database_security() -> Guardrail {
    Guardrail {
        id: "database_security".to_string(),
        title: "Database Security".to_string(),
        description: "Safeguards your application's data storage from unauthorized access and injection attacks.".to_string(),
        icon: "💾".to_string(),
        project_types: ids(&["website", "saas", "api", "ecommerce"]),
        recommendations: vec![
            rec(
                "Use parameterized queries",
                "Prevent SQL injection by using prepared statements or query builders.",
                Priority::High,
                Some(&["mysql", "postgresql"]),
                None,
            ),
            rec(
                "Limit database user permissions",
                "Apply the principle of least privilege to database users and connections.",
                Priority::Medium,
                Some(&["mysql", "postgresql", "mongodb"]),
                None,
            ),
            rec(
                "Encrypt sensitive data",
                "Apply field-level encryption for sensitive information stored in your database.",
                Priority::High,
                None,
                Some(&["payment_info", "pii", "medical"]),
            ),
        ],
        code_examples: vec![example(
            "javascript",
            r#"// NEVER do this
function getUserByUsername(username) {
  // This allows SQL injection
  const query = `SELECT * FROM users WHERE username = '${username}'`;
  return db.execute(query);
}"#,
            r#"// Do this instead
function getUserByUsername(username) {
  // Parameterized query prevents SQL injection
  const query = 'SELECT * FROM users WHERE username = ?';
  return db.execute(query, [username]);
}"#,
            "The secure version uses parameterized queries that separate SQL code from user data, preventing attackers from injecting malicious SQL commands through the username parameter.",
        )],
    }
}

fn input_validation() -> Guardrail {
    Guardrail {
        id: "input_validation".to_string(),
        title: "Input Validation & Sanitization".to_string(),
        description: "Ensures that all user input is properly checked and cleaned to prevent injection attacks.".to_string(),
        icon: "✅".to_string(),
        project_types: ids(ALL_PROJECTS),
        recommendations: vec![
            rec(
                "Validate input on both client and server",
                "Never rely solely on client-side validation; always validate data on the server.",
                Priority::High,
                None,
                None,
            ),
            rec(
                "Sanitize user-generated HTML",
                "Use libraries like DOMPurify to clean user-generated HTML and prevent XSS.",
                Priority::High,
                None,
                Some(&["content"]),
            ),
            rec(
                "Use content security policy (CSP)",
                "Implement CSP headers to restrict which resources can be loaded on your pages.",
                Priority::Medium,
                Some(&["react", "angular", "vue"]),
                None,
            ),
        ],
        code_examples: vec![example(
            "javascript",
            r#"// NEVER do this
function displayUserComment(comment) {
  // Directly inserting user input into the DOM
  document.getElementById('comment-section').innerHTML += comment;
}"#,
            r#"// Do this instead
function displayUserComment(comment) {
  // Sanitize user input before inserting into the DOM
  const sanitizedComment = DOMPurify.sanitize(comment);
  document.getElementById('comment-section').innerHTML += sanitizedComment;
}"#,
            "The secure version uses DOMPurify to sanitize the user-generated content before inserting it into the DOM, preventing Cross-Site Scripting (XSS) attacks that could steal user cookies or execute malicious code.",
        )],
    }
}

fn general_security() -> Guardrail {
    Guardrail {
        id: "general_security".to_string(),
        title: "General Security Recommendations".to_string(),
        description: "Overall best practices to keep your application secure and resilient against various threats.".to_string(),
        icon: "🛡️".to_string(),
        project_types: ids(ALL_PROJECTS),
        recommendations: vec![
            rec(
                "Keep dependencies updated",
                "Regularly update libraries and frameworks to patch known vulnerabilities.",
                Priority::Medium,
                None,
                None,
            ),
            rec(
                "Use HTTPS for all traffic",
                "Encrypt all data in transit using TLS/SSL certificates.",
                Priority::High,
                None,
                None,
            ),
            rec(
                "Implement proper error handling",
                "Avoid exposing sensitive information in error messages to users.",
                Priority::Medium,
                None,
                None,
            ),
            rec(
                "Set up security headers",
                "Configure headers like X-Content-Type-Options and X-Frame-Options.",
                Priority::Medium,
                Some(&["nodejs", "express", "django", "php", "laravel"]),
                None,
            ),
        ],
        code_examples: vec![example(
            "javascript",
            r#"// NEVER do this
app.use((err, req, res, next) => {
  // Detailed error exposed to client
  res.status(500).json({
    message: err.message,
    stack: err.stack,
    details: err
  });
});"#,
            r#"// Do this instead
app.use((err, req, res, next) => {
  // Log detailed error for debugging
  console.error('Error:', err);

  // Return generic message to client
  res.status(500).json({
    message: 'An unexpected error occurred'
  });
});"#,
            "The secure version logs the detailed error information for developers but only returns a generic message to users, preventing potential attackers from gaining insights into your application structure through error messages.",
        )],
    }
}

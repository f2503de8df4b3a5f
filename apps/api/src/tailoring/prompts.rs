// Prompt constants for resume tailoring.
// The output grammar requested here is the input grammar the layout engine parses:
// six header lines, `Section:` headers, `Role at Company: MM/YYYY - MM/YYYY` job lines,
// `·`-prefixed skill categories and `**bold**` emphasis.

/// System prompt for resume tailoring: enforces plain-text transcript output.
pub const TAILOR_SYSTEM: &str = "You are an expert technical resume writer. \
    You rewrite an existing resume so it targets a specific job description. \
    You MUST respond with the resume text only. \
    Do NOT use markdown headings, tables, code fences or decorative characters. \
    Do NOT include explanations, notes or apologies. \
    Do NOT invent employers, titles, dates or degrees that are not in the base resume.";

/// Tailoring prompt template. Replace `{base_resume}`, `{job_description}`,
/// `{company}` and `{role}` before sending.
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"Tailor the base resume below for the {role} position at {company}.

BASE RESUME:
{base_resume}

JOB DESCRIPTION:
{job_description}

FORMAT RULES (follow exactly, the output is parsed by a program):
1. The first six lines are, in this order: a one-line professional headline for this role,
   full name, email, phone, location, profile link. One value per line, no labels.
2. Then a blank line, then the sections in the same order as the base resume.
3. Each section starts with its title on its own line ending in a colon, e.g. "Summary:".
4. Each job starts with one line shaped exactly "Job Title at Company: MM/YYYY - MM/YYYY"
   (use "Current" for an ongoing role), followed by one achievement per line.
5. In the skills section, each category label is on its own line starting with "· ",
   followed by one line listing that category's skills, comma-separated.
6. Wrap the most job-relevant phrases in **double asterisks** for emphasis, sparingly.
7. Plain text only. No bullets other than "· " skill categories, no markdown headings.
"#;

/// Resume used when no `BASE_RESUME_PATH` is configured.
pub const DEFAULT_BASE_RESUME: &str = "Senior Software Engineer
Louis Bailey
louis.bailey@example.com
+1 (512) 555-0143
Austin, TX
linkedin.com/in/louisbailey

Summary:
Backend-focused engineer with nine years of experience building APIs, data pipelines and developer tooling for high-traffic products.

Experience:
Senior Software Engineer at Northwind Labs: 03/2021 - Current
Designed a multi-tenant billing API handling 40M requests per day with 99.95% availability.
Led the migration of 30 services from a monolithic deployment to Kubernetes, cutting release time from days to minutes.
Mentored five engineers and introduced structured design reviews across the platform group.
Software Engineer at Contoso Retail: 06/2017 - 02/2021
Built the order event pipeline on Kafka and PostgreSQL, reducing fulfilment latency by 35%.
Owned the public product catalogue API and its client SDKs.
Junior Developer at Fabrikam Media: 08/2015 - 05/2017
Maintained internal CMS tooling and automated nightly content imports.

Skills:
· Languages
Rust, Go, TypeScript, Python, SQL
· Infrastructure
Kubernetes, Terraform, AWS, PostgreSQL, Kafka, Redis
· Practices
API design, observability, incident response, code review

Education:
B.S. Computer Science at University of Texas at Austin: 09/2011 - 05/2015
";

/// Fills `TAILOR_PROMPT_TEMPLATE` for one request.
pub fn build_tailor_prompt(
    base_resume: &str,
    job_description: &str,
    company: &str,
    role: &str,
) -> String {
    TAILOR_PROMPT_TEMPLATE
        .replace("{base_resume}", base_resume.trim())
        .replace("{job_description}", job_description.trim())
        .replace("{company}", company.trim())
        .replace("{role}", role.trim())
}

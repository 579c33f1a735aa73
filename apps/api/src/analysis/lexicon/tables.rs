//! Built-in rule tables. Plain data; `Lexicon::builtin()` wires them up.

use super::{
    FocusAreaDef, RolePattern, RoleTemplate, SkillCluster, SkillEntry, SkillRelation,
};

// ────────────────────────────────────────────────────────────────────────────
// Skill vocabulary (canonical name, category, surface aliases)
// ────────────────────────────────────────────────────────────────────────────

pub const LANGUAGES: &str = "Programming Languages";
pub const BACKEND: &str = "Backend & APIs";
pub const FRONTEND: &str = "Frontend";
pub const CLOUD: &str = "Cloud & Infrastructure";
pub const DATABASES: &str = "Databases";
pub const DEVOPS: &str = "DevOps & Tooling";
pub const DATA_ML: &str = "Data & Machine Learning";
pub const MOBILE: &str = "Mobile";
pub const SECURITY: &str = "Security";
pub const PRACTICES: &str = "Practices & Methodology";

/// Category display order, used for tie-breaking.
pub const CATEGORY_ORDER: &[&str] = &[
    LANGUAGES, BACKEND, FRONTEND, CLOUD, DATABASES, DEVOPS, DATA_ML, MOBILE, SECURITY,
    PRACTICES,
];

const fn skill(
    name: &'static str,
    category: &'static str,
    aliases: &'static [&'static str],
) -> SkillEntry {
    SkillEntry {
        name,
        category,
        aliases,
        match_name: true,
    }
}

/// Canonical name is an ordinary English word; only the aliases are matched.
const fn alias_only(
    name: &'static str,
    category: &'static str,
    aliases: &'static [&'static str],
) -> SkillEntry {
    SkillEntry {
        name,
        category,
        aliases,
        match_name: false,
    }
}

pub const SKILLS: &[SkillEntry] = &[
    // Languages
    skill("python", LANGUAGES, &["python3"]),
    skill("java", LANGUAGES, &[]),
    skill("javascript", LANGUAGES, &["ecmascript", "js"]),
    skill("typescript", LANGUAGES, &[]),
    alias_only("go", LANGUAGES, &["golang", "go lang"]),
    skill("rust", LANGUAGES, &[]),
    skill("c++", LANGUAGES, &["cpp"]),
    skill("c#", LANGUAGES, &["csharp"]),
    skill("ruby", LANGUAGES, &[]),
    skill("php", LANGUAGES, &[]),
    skill("scala", LANGUAGES, &[]),
    skill("kotlin", LANGUAGES, &[]),
    skill("swift", LANGUAGES, &[]),
    skill("elixir", LANGUAGES, &[]),
    skill("sql", LANGUAGES, &["t-sql", "pl/sql"]),
    skill("html", LANGUAGES, &["html5"]),
    skill("css", LANGUAGES, &["css3"]),
    skill("bash", LANGUAGES, &["shell scripting"]),
    // Backend & APIs
    skill("django", BACKEND, &[]),
    skill("flask", BACKEND, &[]),
    skill("fastapi", BACKEND, &[]),
    skill("spring", BACKEND, &["spring boot", "springboot"]),
    alias_only("express", BACKEND, &["express.js", "expressjs", "express framework"]),
    skill("node.js", BACKEND, &["nodejs", "node"]),
    skill("rails", BACKEND, &["ruby on rails"]),
    skill(".net", BACKEND, &["dotnet", "asp.net"]),
    skill("graphql", BACKEND, &[]),
    skill("grpc", BACKEND, &[]),
    alias_only(
        "rest",
        BACKEND,
        &["restful", "rest api", "rest apis", "rest-api", "rest services", "rest endpoints"],
    ),
    skill("api", BACKEND, &["apis"]),
    skill("microservices", BACKEND, &["microservice"]),
    skill("backend", BACKEND, &["back-end", "back end"]),
    // Frontend
    skill("react", FRONTEND, &["react.js", "reactjs"]),
    skill("angular", FRONTEND, &["angularjs"]),
    skill("vue", FRONTEND, &["vue.js", "vuejs"]),
    skill("next.js", FRONTEND, &["nextjs"]),
    skill("svelte", FRONTEND, &["sveltekit"]),
    skill("redux", FRONTEND, &[]),
    skill("webpack", FRONTEND, &[]),
    skill("tailwind", FRONTEND, &["tailwindcss", "tailwind css"]),
    skill("frontend", FRONTEND, &["front-end", "front end"]),
    skill("full stack", FRONTEND, &["full-stack", "fullstack"]),
    // Cloud & Infrastructure
    skill("aws", CLOUD, &["amazon web services"]),
    skill("azure", CLOUD, &["microsoft azure"]),
    skill("gcp", CLOUD, &["google cloud platform", "google cloud"]),
    skill("ec2", CLOUD, &[]),
    skill("s3", CLOUD, &[]),
    skill("lambda", CLOUD, &[]),
    skill("cloudformation", CLOUD, &[]),
    skill("serverless", CLOUD, &[]),
    skill("terraform", CLOUD, &[]),
    skill("ansible", CLOUD, &[]),
    skill("docker", CLOUD, &[]),
    skill("kubernetes", CLOUD, &["k8s"]),
    skill("helm", CLOUD, &[]),
    skill("vercel", CLOUD, &[]),
    skill("cloud", CLOUD, &["cloud computing"]),
    // Databases
    skill("postgresql", DATABASES, &["postgres"]),
    skill("mysql", DATABASES, &[]),
    skill("mongodb", DATABASES, &["mongo"]),
    skill("redis", DATABASES, &[]),
    skill("cassandra", DATABASES, &[]),
    skill("elasticsearch", DATABASES, &[]),
    skill("dynamodb", DATABASES, &[]),
    skill("sqlite", DATABASES, &[]),
    skill("nosql", DATABASES, &[]),
    skill("database", DATABASES, &["databases"]),
    // DevOps & Tooling
    skill("jenkins", DEVOPS, &[]),
    skill("github actions", DEVOPS, &[]),
    skill("gitlab ci", DEVOPS, &["gitlab-ci"]),
    skill("circleci", DEVOPS, &[]),
    skill("ci/cd", DEVOPS, &["cicd", "continuous integration"]),
    skill("devops", DEVOPS, &[]),
    skill("git", DEVOPS, &[]),
    skill("linux", DEVOPS, &[]),
    skill("monitoring", DEVOPS, &[]),
    skill("prometheus", DEVOPS, &[]),
    skill("grafana", DEVOPS, &[]),
    // Data & Machine Learning
    skill("machine learning", DATA_ML, &["ml"]),
    skill("deep learning", DATA_ML, &[]),
    skill("natural language processing", DATA_ML, &["nlp"]),
    skill("computer vision", DATA_ML, &[]),
    skill("tensorflow", DATA_ML, &[]),
    skill("pytorch", DATA_ML, &[]),
    skill("scikit-learn", DATA_ML, &["sklearn", "scikit learn"]),
    skill("pandas", DATA_ML, &[]),
    skill("numpy", DATA_ML, &[]),
    skill("jupyter", DATA_ML, &[]),
    skill("spark", DATA_ML, &["apache spark"]),
    skill("airflow", DATA_ML, &["apache airflow"]),
    skill("kafka", DATA_ML, &["apache kafka"]),
    skill("hadoop", DATA_ML, &[]),
    skill("flink", DATA_ML, &[]),
    skill("databricks", DATA_ML, &[]),
    skill("snowflake", DATA_ML, &[]),
    skill("statistics", DATA_ML, &[]),
    skill("data science", DATA_ML, &[]),
    skill("ai", DATA_ML, &["artificial intelligence"]),
    // Mobile
    skill("ios", MOBILE, &[]),
    skill("android", MOBILE, &[]),
    skill("react native", MOBILE, &["react-native"]),
    skill("flutter", MOBILE, &[]),
    // Security
    skill("oauth", SECURITY, &["oauth2"]),
    skill("jwt", SECURITY, &[]),
    skill("saml", SECURITY, &[]),
    skill("sso", SECURITY, &["single sign-on"]),
    skill("encryption", SECURITY, &[]),
    skill("security", SECURITY, &["cybersecurity"]),
    skill("penetration testing", SECURITY, &[]),
    // Practices & Methodology
    skill("agile", PRACTICES, &[]),
    skill("scrum", PRACTICES, &[]),
    skill("kanban", PRACTICES, &[]),
    skill("jira", PRACTICES, &[]),
    skill("tdd", PRACTICES, &["test-driven development"]),
    skill("code review", PRACTICES, &["code reviews"]),
    skill("project management", PRACTICES, &[]),
    skill("leadership", PRACTICES, &[]),
];

// ────────────────────────────────────────────────────────────────────────────
// Co-occurrence: explicit skill → skills usually required alongside it
// ────────────────────────────────────────────────────────────────────────────

pub const CO_OCCURRENCE: &[(&str, &[&str])] = &[
    // Cloud platforms
    ("kubernetes", &["helm", "rbac", "service mesh", "istio", "ingress controllers", "pod security", "kubectl"]),
    ("aws", &["iam", "vpc", "cloudwatch", "s3", "ec2", "lambda", "cloudformation", "eks", "rds"]),
    ("azure", &["azure ad", "arm templates", "azure devops", "aks", "azure functions"]),
    ("gcp", &["gke", "cloud functions", "bigquery", "cloud storage", "iam", "stackdriver"]),
    ("docker", &["containerization", "dockerfile", "docker compose", "image optimization", "multi-stage builds"]),
    // Languages
    ("python", &["testing", "packaging", "type hints", "virtual environments", "pip", "pytest", "pep 8"]),
    ("javascript", &["es6+", "async/await", "promises", "closures", "event loop", "npm", "webpack"]),
    ("typescript", &["type safety", "interfaces", "generics", "decorators", "tsconfig"]),
    ("java", &["jvm", "maven", "gradle", "spring framework", "junit", "design patterns"]),
    ("go", &["goroutines", "channels", "interfaces", "error handling", "go modules"]),
    ("rust", &["ownership", "borrow checker", "cargo", "traits", "async rust"]),
    // Frontend frameworks
    ("react", &["state management", "component design", "hooks", "jsx", "virtual dom", "react router", "context api"]),
    ("angular", &["typescript", "rxjs", "dependency injection", "components", "services", "routing"]),
    ("vue", &["vuex", "vue router", "composition api", "single file components"]),
    // Backend frameworks
    ("django", &["orm", "migrations", "middleware", "authentication", "rest framework"]),
    ("flask", &["blueprints", "jinja2", "sqlalchemy", "wsgi"]),
    ("fastapi", &["async", "pydantic", "dependency injection", "openapi", "swagger"]),
    ("express", &["middleware", "routing", "error handling", "authentication"]),
    // Databases
    ("sql", &["query optimization", "data modeling", "indexing", "normalization", "joins", "transactions"]),
    ("postgresql", &["pgadmin", "psql", "jsonb", "full-text search", "replication", "partitioning"]),
    ("mongodb", &["aggregation", "indexing", "sharding", "replica sets", "mongoose"]),
    ("redis", &["caching", "pub/sub", "data structures", "persistence", "clustering"]),
    // DevOps & CI/CD
    ("jenkins", &["pipelines", "groovy", "plugins", "build automation", "continuous integration"]),
    ("github actions", &["workflows", "yaml", "secrets management", "matrix builds"]),
    ("terraform", &["infrastructure as code", "state management", "modules", "providers"]),
    ("ansible", &["playbooks", "roles", "inventory", "yaml", "idempotency"]),
    // Data & analytics
    ("spark", &["rdd", "dataframes", "spark sql", "pyspark", "cluster computing"]),
    ("airflow", &["dags", "operators", "scheduling", "task dependencies", "xcom"]),
    ("kafka", &["producers", "consumers", "topics", "partitions", "stream processing"]),
    // Architecture & methodology
    ("microservices", &["api gateway", "service discovery", "circuit breaker", "distributed tracing"]),
    ("rest", &["http methods", "status codes", "api design", "versioning", "authentication"]),
    ("graphql", &["schema", "resolvers", "queries", "mutations", "subscriptions"]),
    ("agile", &["sprint planning", "retrospectives", "user stories", "backlog grooming"]),
];

// ────────────────────────────────────────────────────────────────────────────
// Role templates: triggers are matched as substrings of the joined skill list
// ────────────────────────────────────────────────────────────────────────────

pub const ROLE_TEMPLATES: &[RoleTemplate] = &[
    RoleTemplate {
        name: "data scientist",
        triggers: &["data", "scientist", "analytics", "ml"],
        hidden: &[
            "data cleaning", "feature engineering", "model evaluation", "a/b testing",
            "data visualization", "statistical analysis", "hypothesis testing",
        ],
    },
    RoleTemplate {
        name: "backend engineer",
        triggers: &["backend", "back-end", "server", "api"],
        hidden: &[
            "database design", "caching strategies", "api versioning", "error handling",
            "logging", "monitoring", "performance optimization", "security best practices",
        ],
    },
    RoleTemplate {
        name: "frontend developer",
        triggers: &["frontend", "front-end", "ui", "react"],
        hidden: &[
            "responsive design", "cross-browser compatibility", "accessibility", "seo",
            "performance optimization", "state management", "component architecture",
        ],
    },
    RoleTemplate {
        name: "devops engineer",
        triggers: &["devops", "infrastructure", "cloud", "deployment"],
        hidden: &[
            "monitoring", "logging", "incident response", "capacity planning",
            "security hardening", "disaster recovery", "automation",
        ],
    },
    RoleTemplate {
        name: "full stack developer",
        triggers: &["full stack", "fullstack", "full-stack"],
        hidden: &[
            "api design", "database optimization", "authentication", "deployment",
            "testing", "version control", "code review",
        ],
    },
    RoleTemplate {
        name: "machine learning engineer",
        triggers: &["machine learning", "ml engineer", "ai"],
        hidden: &[
            "model deployment", "mlops", "feature stores", "model monitoring",
            "hyperparameter tuning", "distributed training", "model versioning",
        ],
    },
    RoleTemplate {
        name: "cloud architect",
        triggers: &["cloud architect", "solutions architect"],
        hidden: &[
            "cost optimization", "security architecture", "high availability",
            "disaster recovery", "compliance", "network design", "migration strategies",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Skill clusters: two explicit members pull in the rest
// ────────────────────────────────────────────────────────────────────────────

pub const CLUSTERS: &[SkillCluster] = &[
    SkillCluster {
        name: "modern_web_stack",
        members: &["react", "typescript", "next.js", "tailwind", "vercel"],
    },
    SkillCluster {
        name: "python_data_stack",
        members: &["python", "pandas", "numpy", "scikit-learn", "jupyter"],
    },
    SkillCluster {
        name: "aws_cloud_stack",
        members: &["aws", "ec2", "s3", "lambda", "cloudformation"],
    },
    SkillCluster {
        name: "devops_stack",
        members: &["docker", "kubernetes", "jenkins", "terraform", "ansible"],
    },
    SkillCluster {
        name: "mern_stack",
        members: &["mongodb", "express", "react", "node.js"],
    },
    SkillCluster {
        name: "data_engineering",
        members: &["spark", "airflow", "kafka", "python", "sql"],
    },
    SkillCluster {
        name: "ml_stack",
        members: &["python", "tensorflow", "pytorch", "scikit-learn", "pandas"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Focus areas and role patterns
// ────────────────────────────────────────────────────────────────────────────

pub const FOCUS_AREAS: &[FocusAreaDef] = &[
    FocusAreaDef {
        name: "Backend Development",
        keywords: &[
            "python", "java", "go", "rust", "c#", "django", "flask", "fastapi", "spring",
            "express", "node.js", "api", "rest", "graphql",
        ],
    },
    FocusAreaDef {
        name: "Frontend Development",
        keywords: &[
            "javascript", "typescript", "react", "angular", "vue", "html", "css", "next.js",
            "svelte", "redux", "webpack",
        ],
    },
    FocusAreaDef {
        name: "Cloud & Infrastructure",
        keywords: &[
            "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible",
            "cloudformation", "serverless",
        ],
    },
    FocusAreaDef {
        name: "Data Engineering",
        keywords: &["spark", "airflow", "kafka", "hadoop", "flink", "databricks", "snowflake"],
    },
    FocusAreaDef {
        name: "Data Science & ML",
        keywords: &[
            "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn",
            "pandas", "numpy", "data science", "ai",
        ],
    },
    FocusAreaDef {
        name: "Database Management",
        keywords: &[
            "postgresql", "mysql", "mongodb", "redis", "cassandra", "elasticsearch", "sql",
            "database",
        ],
    },
    FocusAreaDef {
        name: "DevOps & CI/CD",
        keywords: &[
            "jenkins", "github actions", "gitlab ci", "circleci", "docker", "kubernetes",
            "ci/cd", "devops", "monitoring",
        ],
    },
    FocusAreaDef {
        name: "Mobile Development",
        keywords: &["ios", "android", "react native", "flutter", "swift", "kotlin"],
    },
    FocusAreaDef {
        name: "Security",
        keywords: &["oauth", "jwt", "saml", "sso", "encryption", "security", "penetration testing"],
    },
    FocusAreaDef {
        name: "Project Management",
        keywords: &["agile", "scrum", "kanban", "jira", "project management", "leadership"],
    },
];

pub const ROLE_PATTERNS: &[RolePattern] = &[
    RolePattern {
        name: "Data Scientist",
        keywords: &["python", "machine learning", "statistics", "pandas", "scikit-learn"],
    },
    RolePattern {
        name: "Backend Engineer",
        keywords: &["python", "java", "api", "database", "sql"],
    },
    RolePattern {
        name: "Frontend Developer",
        keywords: &["react", "javascript", "html", "css", "typescript"],
    },
    RolePattern {
        name: "Full Stack Developer",
        keywords: &["react", "node.js", "javascript", "database"],
    },
    RolePattern {
        name: "DevOps Engineer",
        keywords: &["docker", "kubernetes", "aws", "terraform", "ci/cd"],
    },
    RolePattern {
        name: "Data Engineer",
        keywords: &["spark", "airflow", "kafka", "python", "sql"],
    },
    RolePattern {
        name: "Machine Learning Engineer",
        keywords: &["tensorflow", "pytorch", "machine learning", "python"],
    },
    RolePattern {
        name: "Cloud Architect",
        keywords: &["aws", "azure", "gcp", "terraform", "cloud"],
    },
    RolePattern {
        name: "Mobile Developer",
        keywords: &["ios", "android", "react native", "flutter", "swift", "kotlin"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Skill relationships (single-skill lookups)
// ────────────────────────────────────────────────────────────────────────────

pub const RELATIONSHIPS: &[SkillRelation] = &[
    SkillRelation {
        skill: "react",
        prerequisites: &["javascript", "html", "css"],
        complementary: &["redux", "react router", "next.js"],
        advanced: &[],
    },
    SkillRelation {
        skill: "kubernetes",
        prerequisites: &["docker", "containerization"],
        complementary: &["helm"],
        advanced: &["service mesh", "operators"],
    },
    SkillRelation {
        skill: "terraform",
        prerequisites: &["infrastructure as code", "cloud platforms"],
        complementary: &["ansible"],
        advanced: &["terraform modules", "remote state"],
    },
    SkillRelation {
        skill: "machine learning",
        prerequisites: &["python", "statistics", "linear algebra"],
        complementary: &["pandas", "numpy"],
        advanced: &["deep learning", "mlops"],
    },
    SkillRelation {
        skill: "python",
        prerequisites: &[],
        complementary: &["pip", "virtual environments", "pytest"],
        advanced: &["async programming", "metaclasses", "decorators"],
    },
    SkillRelation {
        skill: "docker",
        prerequisites: &["linux"],
        complementary: &["docker compose", "kubernetes"],
        advanced: &["multi-stage builds"],
    },
    SkillRelation {
        skill: "javascript",
        prerequisites: &["html", "css"],
        complementary: &["npm"],
        advanced: &["typescript", "webpack", "babel"],
    },
    SkillRelation {
        skill: "sql",
        prerequisites: &[],
        complementary: &["data modeling"],
        advanced: &["query optimization", "database tuning"],
    },
];

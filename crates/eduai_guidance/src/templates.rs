//! Static guidance content: roadmaps per degree track, skill lists per goal track.
//!
//! These tables are read-only and defined at compile time; template lookups are
//! exhaustive matches, so every track has content.

use crate::tracks::{DegreeTrack, GoalTrack};

/// A career roadmap for one degree track.
#[derive(Debug, Clone, Copy)]
pub struct Roadmap {
    pub title: &'static str,
    /// Numbered steps, already prefixed with their position.
    pub steps: &'static [&'static str],
    pub careers: &'static [&'static str],
}

impl Roadmap {
    pub fn steps_block(&self) -> String {
        self.steps.join("\n")
    }

    pub fn careers_line(&self) -> String {
        self.careers.join(", ")
    }
}

const COMPUTER_SCIENCE: Roadmap = Roadmap {
    title: "Computer Science Career Roadmap",
    steps: &[
        "1. Master Core Programming (Python, Java, JavaScript)",
        "2. Learn Data Structures & Algorithms",
        "3. Choose Specialization: AI/ML, Web Development, or Data Science",
        "4. Build Portfolio Projects",
        "5. Get Industry Certifications (AWS, Azure, Google Cloud)",
        "6. Network and Apply for Internships",
        "7. Start with Junior Developer Role",
        "8. Advance to Senior/Lead Positions",
    ],
    careers: &[
        "Software Engineer",
        "Data Scientist",
        "AI/ML Engineer",
        "Full-Stack Developer",
        "DevOps Engineer",
        "Cybersecurity Analyst",
    ],
};

const ENGINEERING: Roadmap = Roadmap {
    title: "Engineering to Tech Career Roadmap",
    steps: &[
        "1. Strengthen Programming Fundamentals (Python, C++, Java)",
        "2. Learn Software Development Methodologies",
        "3. Master Relevant Tools (Git, Docker, Cloud Platforms)",
        "4. Build Technical Projects",
        "5. Gain Industry Experience Through Internships",
        "6. Consider Advanced Certifications",
        "7. Transition to Software Engineering Roles",
        "8. Specialize in Embedded Systems or Robotics",
    ],
    careers: &[
        "Software Engineer",
        "Systems Engineer",
        "Data Engineer",
        "Technical Consultant",
        "Embedded Systems Engineer",
    ],
};

const BUSINESS: Roadmap = Roadmap {
    title: "Business to Tech Career Roadmap",
    steps: &[
        "1. Learn Basic Programming (Python, SQL)",
        "2. Understand Digital Tools and Platforms",
        "3. Develop Technical Literacy",
        "4. Focus on Product Management or Data Analysis",
        "5. Build Digital Projects",
        "6. Network in Tech Industry",
        "7. Consider Relevant Certifications",
        "8. Start with Business Analyst Role",
    ],
    careers: &[
        "Product Manager",
        "Business Analyst",
        "Digital Marketing Manager",
        "Data Analyst",
        "Digital Transformation Specialist",
    ],
};

const AI_ML_SKILLS: &[&str] = &[
    "Python (NumPy, Pandas, Scikit-learn)",
    "Deep Learning (TensorFlow, PyTorch)",
    "Machine Learning Algorithms",
    "Data Visualization (Matplotlib, Seaborn)",
    "Statistics and Mathematics",
    "Cloud Platforms (AWS SageMaker, Google AI)",
];

const WEB_DEVELOPMENT_SKILLS: &[&str] = &[
    "HTML, CSS, JavaScript",
    "React.js or Vue.js",
    "Node.js and Express",
    "Database Management (SQL, MongoDB)",
    "Git and Version Control",
    "Deployment and DevOps",
];

const DATA_SCIENCE_SKILLS: &[&str] = &[
    "Python for Data Analysis",
    "SQL and Database Management",
    "Statistical Analysis",
    "Data Visualization Tools",
    "Machine Learning Basics",
    "Big Data Technologies",
];

pub fn roadmap(track: DegreeTrack) -> &'static Roadmap {
    match track {
        DegreeTrack::ComputerScience => &COMPUTER_SCIENCE,
        DegreeTrack::Engineering => &ENGINEERING,
        DegreeTrack::Business => &BUSINESS,
    }
}

pub fn skills(track: GoalTrack) -> &'static [&'static str] {
    match track {
        GoalTrack::AiMl => AI_ML_SKILLS,
        GoalTrack::WebDevelopment => WEB_DEVELOPMENT_SKILLS,
        GoalTrack::DataScience => DATA_SCIENCE_SKILLS,
    }
}

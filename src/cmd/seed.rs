use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::{
    conf::settings,
    pkg::internal::{auth, salary::SalaryRange},
    prelude::Result,
};

const DEMO_USERS: &[(&str, &str, &str)] = &[
    ("recruiter1", "password123", "recruiter"),
    ("candidate1", "password123", "candidate"),
    ("recruiter2", "securepass", "recruiter"),
    ("candidate2", "mypassword", "candidate"),
];

// (recruiter index, title, description, skills, salary, location, experience)
const SAMPLE_JOBS: &[(usize, &str, &str, &str, &str, &str, &str)] = &[
    (0, "Embedded Software Engineer", "Develop firmware for IoT devices. Experience with C/C++ and RTOS.", "C, C++, RTOS, Microcontrollers, IoT", "80k-120k USD", "Bangalore, India", "3-5 Years"),
    (0, "FPGA Design Engineer", "Design and verify FPGA logic for high-speed communication systems.", "VHDL, Verilog, FPGA, RTL, Xilinx, Altera", "90k-130k USD", "Hyderabad, India", "5-8 Years"),
    (0, "VLSI Design Engineer", "Work on ASIC design and verification flows.", "Verilog, SystemVerilog, UVM, ASIC, Physical Design", "100k-150k USD", "Pune, India", "6-10 Years"),
    (0, "RF Engineer", "Design and test RF circuits for wireless communication.", "RF, Circuit Design, Antenna, MATLAB, Simulink", "75k-110k USD", "Chennai, India", "4-7 Years"),
    (0, "Power Electronics Engineer", "Develop power conversion systems and motor control.", "Power Electronics, DC-DC, AC-DC, Motor Control, Altium", "85k-125k USD", "Mumbai, India", "3-6 Years"),
    (0, "Hardware Design Engineer", "Develop schematics and layouts for complex PCBs.", "PCB Design, Altium, KiCAD, Analog, Digital", "80k-120k USD", "Delhi, India", "4-6 Years"),
    (0, "Signal Processing Engineer", "Implement algorithms for real-time signal processing.", "DSP, MATLAB, Python, C++, Algorithm Development", "90k-135k USD", "Bangalore, India", "5-8 Years"),
    (0, "Firmware Engineer (Automotive)", "Develop and test automotive embedded software.", "AUTOSAR, CAN, LIN, C, Embedded Systems", "95k-140k USD", "Hyderabad, India", "5-9 Years"),
    (0, "IoT Solutions Architect", "Design end-to-end IoT solutions from sensor to cloud.", "IoT, Cloud, AWS IoT, Azure IoT, MQTT, Edge Computing", "110k-160k USD", "Pune, India", "7-12 Years"),
    (0, "Mixed-Signal IC Design Engineer", "Design and verify mixed-signal integrated circuits.", "CMOS, Analog, Digital, Cadence, Spectre", "105k-155k USD", "Bangalore, India", "6-10 Years"),
    (0, "Optical Engineer", "Develop and test optical systems for various applications.", "Optics, Lasers, Photonics, ZEMAX, MATLAB", "80k-120k USD", "Chennai, India", "4-7 Years"),
    (0, "EMI/EMC Engineer", "Perform EMI/EMC testing and design for compliance.", "EMI, EMC, FCC, CE, Anechoic Chamber", "70k-100k USD", "Mumbai, India", "3-5 Years"),
    (1, "AI/ML Engineer", "Develop and deploy machine learning models for various applications.", "Python, TensorFlow, PyTorch, Scikit-learn, AWS SageMaker", "100k-150k USD", "Bangalore, India", "4-7 Years"),
    (1, "Software Development Engineer", "Build scalable backend services.", "Python, REST API, PostgreSQL, Docker", "90k-130k USD", "Hyderabad, India", "3-6 Years"),
    (1, "Cloud Engineer (AWS)", "Design and implement cloud infrastructure on AWS.", "AWS, EC2, S3, Lambda, CloudFormation, Terraform", "110k-160k USD", "Pune, India", "5-8 Years"),
    (1, "Frontend Developer (React)", "Develop interactive user interfaces using React and Redux.", "React, Redux, JavaScript, HTML, CSS, SASS", "85k-125k USD", "Chennai, India", "3-5 Years"),
    (1, "DevOps Engineer", "Automate CI/CD pipelines and manage infrastructure.", "CI/CD, Jenkins, GitLab CI, Kubernetes, Ansible, Linux", "95k-140k USD", "Mumbai, India", "4-7 Years"),
    (1, "Full Stack Developer", "Work on both frontend and backend development with modern frameworks.", "Python, Django, React, PostgreSQL, Docker, AWS", "100k-150k USD", "Delhi, India", "5-8 Years"),
    (1, "Data Scientist", "Analyze large datasets, build predictive models, and visualize results.", "Python, R, SQL, Pandas, NumPy, Machine Learning, Tableau", "105k-155k USD", "Bangalore, India", "5-9 Years"),
    (1, "Cybersecurity Engineer", "Protect systems and data from cyber threats, implement security measures.", "Security, Penetration Testing, SIEM, Firewalls, Network Security", "90k-130k USD", "Hyderabad, India", "4-6 Years"),
    (1, "Mobile App Developer (Android)", "Develop native Android applications.", "Java, Kotlin, Android Studio, REST APIs, UI/UX", "80k-120k USD", "Pune, India", "3-5 Years"),
    (1, "Game Developer", "Develop games using Unity or Unreal Engine.", "C#, Unity, C++, Unreal Engine, Game Design", "75k-110k USD", "Bangalore, India", "3-6 Years"),
    (1, "Database Administrator", "Manage and optimize relational databases.", "SQL, MySQL, PostgreSQL, Oracle, Database Optimization", "85k-125k USD", "Chennai, India", "4-7 Years"),
    (1, "UX/UI Designer", "Design intuitive and engaging user experiences.", "Figma, Sketch, Adobe XD, User Research, Wireframing", "70k-100k USD", "Mumbai, India", "3-5 Years"),
    (1, "Backend Engineer (Go)", "Build high-performance backend services using Go.", "Go, Microservices, Docker, Kubernetes, gRPC", "110k-160k USD", "Delhi, India", "5-8 Years"),
];

async fn user_id(pool: &SqlitePool, username: &str) -> Result<i64> {
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

pub async fn apply() -> Result<()> {
    let pool = SqlitePoolOptions::new()
        .connect(&settings.database_url)
        .await?;
    // schema is create-if-absent, so seeding is safe on a fresh database
    crate::cmd::migrate::MIGRATOR.run(&pool).await?;

    for (username, password, role) in DEMO_USERS {
        let hashed = auth::hash_password(password)?;
        sqlx::query("INSERT OR IGNORE INTO users (username, password, role) VALUES (?, ?, ?)")
            .bind(username)
            .bind(hashed)
            .bind(role)
            .execute(&pool)
            .await?;
    }

    let (jobs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
        .fetch_one(&pool)
        .await?;
    if jobs > 0 {
        println!("Jobs already present, skipping sample jobs");
        return Ok(());
    }

    let recruiters = [
        user_id(&pool, "recruiter1").await?,
        user_id(&pool, "recruiter2").await?,
    ];
    for (who, title, description, skills, salary, location, experience) in SAMPLE_JOBS {
        let parsed = SalaryRange::parse(salary);
        sqlx::query(
            "INSERT INTO jobs (recruiter_id, title, description, skills, salary,
                               salary_min, salary_max, salary_currency, location, experience)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(recruiters[*who])
        .bind(title)
        .bind(description)
        .bind(skills)
        .bind(salary)
        .bind(parsed.as_ref().map(|s| s.min))
        .bind(parsed.as_ref().and_then(|s| s.max))
        .bind(parsed.as_ref().and_then(|s| s.currency.clone()))
        .bind(location)
        .bind(experience)
        .execute(&pool)
        .await?;
    }

    println!("Database seeded successfully with users and jobs.");
    Ok(())
}

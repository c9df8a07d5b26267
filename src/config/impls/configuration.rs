use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_config::ApiConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::database_structure_config_contacts::DatabaseStructureConfigContacts;
use crate::config::structs::database_structure_config_stats::DatabaseStructureConfigStats;
use crate::config::structs::database_structure_config_visits::DatabaseStructureConfigVisits;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::profile_config::ProfileConfig;
use crate::config::structs::project_config::ProjectConfig;
use crate::config::structs::skill_group_config::SkillGroupConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            http_server: HttpServerConfig {
                bind_address: String::from("0.0.0.0:8080"),
                real_ip: String::from("X-Real-IP"),
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15,
                threads: available_parallelism().unwrap().get() as u64
            },
            api: ApiConfig {
                admin_token: String::from("MyAdminToken"),
                prometheus_id: String::from("portfolio"),
                recent_visitors_limit: 10,
                contacts_limit: 100,
                fallback_visitor_count: 42
            },
            database: DatabaseConfig {
                enabled: true,
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://portfolio.db"),
                timeout: 2
            },
            database_structure: DatabaseStructureConfig {
                visits: DatabaseStructureConfigVisits {
                    table_name: String::from("visits"),
                    column_id: String::from("id"),
                    column_origin: String::from("origin_address"),
                    column_signature: String::from("client_signature"),
                    column_observed_at: String::from("observed_at"),
                    column_path: String::from("path")
                },
                stats: DatabaseStructureConfigStats {
                    table_name: String::from("stats"),
                    column_id: String::from("id"),
                    column_total_visitors: String::from("total_visitors"),
                    column_last_updated: String::from("last_updated")
                },
                contacts: DatabaseStructureConfigContacts {
                    table_name: String::from("contacts"),
                    column_id: String::from("id"),
                    column_name: String::from("name"),
                    column_email: String::from("email"),
                    column_message: String::from("message"),
                    column_submitted_at: String::from("submitted_at"),
                    column_status: String::from("status"),
                    column_origin: String::from("origin_address")
                }
            },
            profile: ProfileConfig {
                app_name: String::from("Oriyan Rask DevOps Portfolio"),
                owner: String::from("Oriyan Rask"),
                role: String::from("DevOps Junior Engineer"),
                email: String::from("oriyanrwork99@gmail.com"),
                github: String::from("https://github.com/MasteRefleX123"),
                location: String::from("Modiin, Israel"),
                education: String::from("SELA College Graduate"),
                specialization: String::from("DevOps, Networks, Security"),
                experience: String::from("DevOps Junior"),
                certifications: 1,
                tagline: String::from("Looking to change the world, and to do it with a smile")
            },
            skills: vec!(
                SkillGroupConfig {
                    category: String::from("devops_tools"),
                    items: vec!(String::from("Docker"), String::from("Kubernetes"), String::from("Jenkins"), String::from("Git"))
                },
                SkillGroupConfig {
                    category: String::from("cloud_platforms"),
                    items: vec!(String::from("AWS"), String::from("Azure"))
                },
                SkillGroupConfig {
                    category: String::from("networking"),
                    items: vec!(String::from("Network Administration"), String::from("Network Security"))
                },
                SkillGroupConfig {
                    category: String::from("programming"),
                    items: vec!(String::from("Python"), String::from("Bash"), String::from("YAML"))
                },
                SkillGroupConfig {
                    category: String::from("monitoring"),
                    items: vec!(String::from("Prometheus"), String::from("Grafana"))
                }
            ),
            projects: vec!(
                ProjectConfig {
                    name: String::from("DevOps Portfolio Project"),
                    description: String::from("Full DevOps graduation project with a containerized web stack and CI/CD pipeline"),
                    technologies: vec!(String::from("Docker"), String::from("Kubernetes"), String::from("Jenkins"), String::from("MongoDB")),
                    github: String::from("https://github.com/MasteRefleX123/devops-portfolio-project"),
                    status: String::from("in development")
                }
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file("config.toml") {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config = Configuration::init();
                let config_toml = toml::to_string(&config).unwrap();
                return match Configuration::save_file("config.toml", config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the config.toml in the root folder, exiting now...");
                        Err(ConfigurationError::IOError(std::io::Error::other("created config.toml file")))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(&config);
        Ok(config)
    }

    pub fn validate(config: &Configuration) {
        let identifier = r"^[a-z_][a-z0-9_]{0,30}$";
        let structure = &config.database_structure;
        let check_map = vec![
            ("[DB: visits]", structure.visits.table_name.clone()),
            ("[DB: visits] Column: id", structure.visits.column_id.clone()),
            ("[DB: visits] Column: origin", structure.visits.column_origin.clone()),
            ("[DB: visits] Column: signature", structure.visits.column_signature.clone()),
            ("[DB: visits] Column: observed_at", structure.visits.column_observed_at.clone()),
            ("[DB: visits] Column: path", structure.visits.column_path.clone()),
            ("[DB: stats]", structure.stats.table_name.clone()),
            ("[DB: stats] Column: id", structure.stats.column_id.clone()),
            ("[DB: stats] Column: total_visitors", structure.stats.column_total_visitors.clone()),
            ("[DB: stats] Column: last_updated", structure.stats.column_last_updated.clone()),
            ("[DB: contacts]", structure.contacts.table_name.clone()),
            ("[DB: contacts] Column: id", structure.contacts.column_id.clone()),
            ("[DB: contacts] Column: name", structure.contacts.column_name.clone()),
            ("[DB: contacts] Column: email", structure.contacts.column_email.clone()),
            ("[DB: contacts] Column: message", structure.contacts.column_message.clone()),
            ("[DB: contacts] Column: submitted_at", structure.contacts.column_submitted_at.clone()),
            ("[DB: contacts] Column: status", structure.contacts.column_status.clone()),
            ("[DB: contacts] Column: origin", structure.contacts.column_origin.clone()),
        ];

        for (name, value) in check_map {
            Self::validate_value(name, value, identifier.to_string());
        }

        Self::validate_value("[DB] Path", config.database.path.clone(), r"^(sqlite|mysql|postgres(ql)?)://.+$".to_string());
    }

    pub fn validate_value(name: &str, value: String, regex: String)
    {
        let regex_check = Regex::new(regex.as_str()).unwrap();
        if !regex_check.is_match(value.as_str()) {
            panic!("[VALIDATE CONFIG] Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check);
        }
    }
}

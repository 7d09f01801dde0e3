//! 사용자 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 구성 요소를 초기화합니다.
//! MongoDB 연결을 설정하고 사용자 계정 CRUD + 인증 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use account_service_backend::config::{SeedConfig, ServerConfig};
use account_service_backend::db::Database;
use account_service_backend::repositories::users::{MongoUserRepository, UserRepository};
use account_service_backend::routes::configure_all_routes;
use account_service_backend::seed::seed_users;
use account_service_backend::services::auth::AuthService;
use account_service_backend::services::users::user_service::UserService;
use account_service_backend::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, print_sub_task,
};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 계정 서비스 시작중...");

    print_boxed_title("🔄 INITIALIZING ACCOUNT SERVICE");

    // 데이터 스토어 초기화
    print_step_start(1, "Connecting to MongoDB");
    let database = Database::new()
        .await
        .expect("데이터베이스 연결 실패");
    print_step_complete(1, "MongoDB connected");

    // 리포지토리 준비 (보조 인덱스 포함)
    print_step_start(2, "Preparing user repository");
    let mongo_repo = MongoUserRepository::new(&database);
    match mongo_repo.create_indexes().await {
        Ok(_) => print_sub_task("users 컬렉션 인덱스", "OK"),
        Err(e) => {
            // 인덱스 생성 실패는 기동을 막지 않는다
            error!("인덱스 생성 실패: {}", e);
            print_sub_task("users 컬렉션 인덱스", "Failed");
        }
    }
    let user_repo: Arc<dyn UserRepository> = Arc::new(mongo_repo);
    print_step_complete(2, "User repository ready");

    // 서비스 조립 (명시적 의존성 주입)
    print_step_start(3, "Assembling services");
    let user_service = web::Data::new(UserService::new(user_repo.clone()));
    let auth_service = web::Data::new(AuthService::new(user_repo));
    print_sub_task("UserService", "✓ Created");
    print_sub_task("AuthService", "✓ Created");
    print_step_complete(3, "Services assembled");

    // 샘플 데이터 시딩 (선택)
    if SeedConfig::enabled() {
        print_step_start(4, "Seeding sample users");
        match seed_users(&user_service).await {
            Ok(_) => print_step_complete(4, "Sample users seeded"),
            Err(e) => {
                error!("시드 데이터 생성 실패: {}", e);
                print_sub_task("시드 데이터", "Failed");
            }
        }
    } else {
        print_sub_task("시드 데이터", "Skipped");
    }

    info!("✅ 모든 구성 요소가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service, auth_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Actix-web 기반 HTTP 서버를 설정하고 실행합니다.
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Arguments
///
/// * `user_service` - 모든 워커에 공유되는 사용자 서비스
/// * `auth_service` - 모든 워커에 공유되는 인증 서비스
///
/// # Returns
///
/// * `Ok(())` - 서버가 정상적으로 종료됨
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 서버는 기본적으로 0.0.0.0:5000에서 실행됩니다 (HOST/PORT로 변경 가능)
/// // Health check: http://localhost:5000/health
/// // API 엔드포인트: http://localhost:5000/api/*
/// ```
async fn start_http_server(
    user_service: web::Data<UserService>,
    auth_service: web::Data<AuthService>,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: http://{}/api", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 서비스 주입
            .app_data(user_service.clone())
            .app_data(auth_service.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=account_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing) 설정을 구성합니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
///
/// # Returns
///
/// * `Cors` - 구성된 CORS 미들웨어
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:5000` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors();
/// App::new().wrap(cors)
/// ```
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:5000")
        .allowed_origin("http://127.0.0.1:5000")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// 환경변수에서 다음 설정을 읽어옵니다:
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
///
/// # Returns
///
/// * `RateLimitConfig` - 로드된 Rate Limiting 설정
///
/// # Examples
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
///
/// # .env.prod (운영 환경)
/// RATE_LIMIT_PER_SECOND=500
/// RATE_LIMIT_BURST_SIZE=1000
/// ```
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

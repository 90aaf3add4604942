// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_backend::{
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    repository::{QuestionFilter, RepoResult, TriviaRepository},
    routes,
    state::{AppState, SharedRepository},
};

pub const SEED_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category, difficulty)
const SEED_QUESTIONS: [(&str, &str, i64, i32); 18] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism?", "Jackson Pollock", 2, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What is the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930, the host nation?", "Uruguay", 6, 4),
];

#[derive(Default)]
struct Store {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
}

/// Store double mirroring `PgTriviaRepository` semantics in memory.
#[derive(Default)]
pub struct InMemoryTriviaRepository {
    store: RwLock<Store>,
    failing: AtomicBool,
}

impl InMemoryTriviaRepository {
    /// Six categories and eighteen questions, ids starting at 1.
    pub fn seeded() -> Self {
        let categories = SEED_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, name)| Category {
                id: i as i64 + 1,
                kind: name.to_string(),
            })
            .collect();

        let questions: Vec<Question> = SEED_QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, (question, answer, category, difficulty))| Question {
                id: i as i64 + 1,
                question: question.to_string(),
                answer: answer.to_string(),
                category: *category,
                difficulty: *difficulty,
            })
            .collect();

        let next_id = questions.len() as i64 + 1;
        Self {
            store: RwLock::new(Store {
                categories,
                questions,
                next_id,
            }),
            failing: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent store call fail.
    pub fn fail_store(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub async fn add_category(&self, name: &str) -> i64 {
        let mut store = self.store.write().await;
        let id = store.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        store.categories.push(Category {
            id,
            kind: name.to_string(),
        });
        id
    }

    /// Inserts a question without any category check.
    pub async fn add_question(&self, question: &str, category: i64) -> i64 {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;
        store.questions.push(Question {
            id,
            question: question.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        });
        id
    }

    pub async fn question_ids(&self, category: i64) -> Vec<i64> {
        let store = self.store.read().await;
        store
            .questions
            .iter()
            .filter(|q| q.category == category)
            .map(|q| q.id)
            .collect()
    }

    fn check(&self) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}

#[async_trait]
impl TriviaRepository for InMemoryTriviaRepository {
    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        self.check()?;
        Ok(self.store.read().await.categories.clone())
    }

    async fn find_category(&self, id: i64) -> RepoResult<Option<Category>> {
        self.check()?;
        let store = self.store.read().await;
        Ok(store.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn fetch_question_page(&self, offset: i64, limit: i64) -> RepoResult<(Vec<Question>, i64)> {
        self.check()?;
        let store = self.store.read().await;
        let page = store
            .questions
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        Ok((page, store.questions.len() as i64))
    }

    async fn list_questions(&self, filter: QuestionFilter) -> RepoResult<Vec<Question>> {
        self.check()?;
        let store = self.store.read().await;
        Ok(store
            .questions
            .iter()
            .filter(|q| match filter {
                QuestionFilter::All => true,
                QuestionFilter::Category(id) => q.category == id,
            })
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>> {
        self.check()?;
        let needle = term.to_lowercase();
        let store = self.store.read().await;
        Ok(store
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_question(&self, id: i64) -> RepoResult<Option<Question>> {
        self.check()?;
        let store = self.store.read().await;
        Ok(store.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: &NewQuestion) -> RepoResult<i64> {
        self.check()?;
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;
        store.questions.push(Question {
            id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty as i32,
        });
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> RepoResult<bool> {
        self.check()?;
        let mut store = self.store.write().await;
        let before = store.questions.len();
        store.questions.retain(|q| q.id != id);
        Ok(store.questions.len() < before)
    }
}

/// Spawns the app on a random port and returns its base URL.
pub async fn spawn_app(repo: Arc<InMemoryTriviaRepository>) -> String {
    let shared: SharedRepository = repo;
    let app = routes::create_router(AppState::new(shared));

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Spawns the app over a freshly seeded store, returning both.
pub async fn spawn_seeded() -> (String, Arc<InMemoryTriviaRepository>) {
    let repo = Arc::new(InMemoryTriviaRepository::seeded());
    let address = spawn_app(repo.clone()).await;
    (address, repo)
}

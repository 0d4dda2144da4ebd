// Dweve FMTBench - Format Token & Accuracy Benchmark
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Static benchmark fixtures: 20 datasets, 300 questions.
//!
//! Expected answers are hand-verified against the data. Three datasets
//! (users_25, users_100) are generated procedurally so record counts and
//! aggregates stay consistent by construction.

use serde_json::{json, Value};

use crate::dataset::Dataset;
use crate::question::{AnswerType, Question};

fn q(text: &str, expected: Value, answer_type: AnswerType, category: &str) -> Question {
    Question::new(text, expected, answer_type, category)
}

use AnswerType::{Boolean, Date, Email, List, Null, Number, String as Str};

const RETRIEVAL: &str = "retrieval";
const COUNTING: &str = "counting";
const AGGREGATION: &str = "aggregation";
const FILTERING: &str = "filtering";
const RELATIONSHIP: &str = "relationship";
const EDGE: &str = "edge";

/// All benchmark datasets in run order
pub fn create_datasets() -> Vec<Dataset> {
    vec![
        users_5(),
        users_25(),
        users_100(),
        orders_simple(),
        ecommerce(),
        org_hierarchy(),
        analytics(),
        metrics(),
        social_graph(),
        company_graph(),
        config(),
        logs(),
        transactions(),
        stocks(),
        inventory(),
        products(),
        edge_nulls(),
        edge_numbers(),
        edge_strings(),
        comprehensive(),
    ]
}

fn users_5() -> Dataset {
    let data = json!({
        "users": [
            {"id": 1, "name": "Alice", "email": "alice@tech.io", "role": "admin", "active": true, "age": 28},
            {"id": 2, "name": "Bob", "email": "bob@corp.com", "role": "user", "active": true, "age": 34},
            {"id": 3, "name": "Carol", "email": "carol@startup.dev", "role": "user", "active": false, "age": 29},
            {"id": 4, "name": "David", "email": "david@bigco.net", "role": "admin", "active": true, "age": 42},
            {"id": 5, "name": "Eve", "email": "eve@agency.org", "role": "guest", "active": false, "age": 31},
        ]
    });
    let questions = vec![
        q("What is Alice's email?", json!("alice@tech.io"), Email, RETRIEVAL),
        q("What is Bob's role?", json!("user"), Str, RETRIEVAL),
        q("What is Carol's age?", json!(29), Number, RETRIEVAL),
        q("Is David active?", json!(true), Boolean, RETRIEVAL),
        q("What role does Eve have?", json!("guest"), Str, RETRIEVAL),
        q("How many users are there?", json!(5), Number, COUNTING),
        q("How many admins are there?", json!(2), Number, COUNTING),
        q("How many users are active?", json!(3), Number, COUNTING),
        q("How many users are NOT active?", json!(2), Number, COUNTING),
        q("What is the average age?", json!(32.8), Number, AGGREGATION),
        q("Who is the oldest user?", json!("David"), Str, AGGREGATION),
        q("Who is the youngest user?", json!("Alice"), Str, AGGREGATION),
        q("What is the total age of all users?", json!(164), Number, AGGREGATION),
        q("Which users are inactive?", json!("Carol, Eve"), List, FILTERING),
        q("Which users are admins?", json!("Alice, David"), List, FILTERING),
    ];
    Dataset::new("users_5", "5 users with basic info", data, questions)
}

fn users_25() -> Dataset {
    let roles = ["admin", "user", "guest", "moderator"];
    let depts = ["Engineering", "Sales", "Marketing", "Support", "HR"];
    let users: Vec<Value> = (1..=25)
        .map(|i: i64| {
            json!({
                "id": i,
                "name": format!("User{}", i),
                "email": format!("user{}@company.com", i),
                "role": roles[(i % 4) as usize],
                "department": depts[(i % 5) as usize],
                "active": i % 3 != 0,
                "salary": 50000 + i * 2000,
            })
        })
        .collect();
    let data = json!({ "users": users });
    let questions = vec![
        q("What is User10's email?", json!("user10@company.com"), Email, RETRIEVAL),
        q("What department is User15 in?", json!("Engineering"), Str, RETRIEVAL),
        q("What is User20's salary?", json!(90000), Number, RETRIEVAL),
        q("What role does User8 have?", json!("admin"), Str, RETRIEVAL),
        q("Is User9 active?", json!(false), Boolean, RETRIEVAL),
        q("How many users are there?", json!(25), Number, COUNTING),
        q("How many users are active?", json!(17), Number, COUNTING),
        q("How many users are admins?", json!(6), Number, COUNTING),
        q("How many users are in Engineering?", json!(5), Number, COUNTING),
        q("How many users are inactive?", json!(8), Number, COUNTING),
        q("What is the highest salary?", json!(100000), Number, AGGREGATION),
        q("What is the lowest salary?", json!(52000), Number, AGGREGATION),
        q("Who has the highest salary?", json!("User25"), Str, AGGREGATION),
        q("What is User1's department?", json!("Sales"), Str, RETRIEVAL),
        q("What is User25's role?", json!("user"), Str, RETRIEVAL),
    ];
    Dataset::new("users_25", "25 users with roles and departments", data, questions)
}

fn users_100() -> Dataset {
    let roles = ["admin", "user", "guest"];
    let levels = ["junior", "mid", "senior", "lead", "director"];
    let depts = [
        "Engineering",
        "Sales",
        "Marketing",
        "Support",
        "HR",
        "Finance",
        "Legal",
        "Operations",
    ];
    let users: Vec<Value> = (1..=100)
        .map(|i: i64| {
            json!({
                "id": i,
                "name": format!("Emp{}", i),
                "email": format!("emp{}@corp.com", i),
                "active": i % 2 == 0,
                "role": roles[(i % 3) as usize],
                "level": levels[(i % 5) as usize],
                "department": depts[(i % 8) as usize],
            })
        })
        .collect();
    let data = json!({ "users": users });
    let questions = vec![
        q("What is Emp50's email?", json!("emp50@corp.com"), Email, RETRIEVAL),
        q("What level is Emp25?", json!("director"), Str, RETRIEVAL),
        q("Is Emp75 active?", json!(false), Boolean, RETRIEVAL),
        q("What department is Emp40 in?", json!("Engineering"), Str, RETRIEVAL),
        q("What is Emp100's level?", json!("director"), Str, RETRIEVAL),
        q("How many employees are there?", json!(100), Number, COUNTING),
        q("How many employees are active?", json!(50), Number, COUNTING),
        q("How many employees are inactive?", json!(50), Number, COUNTING),
        q("How many directors are there?", json!(20), Number, COUNTING),
        q("How many employees are in Engineering?", json!(12), Number, COUNTING),
        q("What is Emp1's role?", json!("user"), Str, RETRIEVAL),
        q("What department is Emp99 in?", json!("Legal"), Str, RETRIEVAL),
        q("Is Emp50 active?", json!(true), Boolean, RETRIEVAL),
        q("What level is Emp100?", json!("director"), Str, RETRIEVAL),
        q("What is Emp33's role?", json!("admin"), Str, RETRIEVAL),
    ];
    Dataset::new("users_100", "100 employees with levels and departments", data, questions)
}

fn orders_simple() -> Dataset {
    let data = json!({
        "orders": [
            {"id": 1, "customer": "Alice", "product": "Laptop", "quantity": 1, "price": 999.99, "status": "shipped"},
            {"id": 2, "customer": "Bob", "product": "Mouse", "quantity": 2, "price": 29.99, "status": "delivered"},
            {"id": 3, "customer": "Carol", "product": "Keyboard", "quantity": 1, "price": 79.99, "status": "pending"},
            {"id": 4, "customer": "Alice", "product": "Monitor", "quantity": 1, "price": 299.99, "status": "shipped"},
            {"id": 5, "customer": "David", "product": "Webcam", "quantity": 1, "price": 49.99, "status": "delivered"},
        ]
    });
    let questions = vec![
        q("What did Alice order in order 1?", json!("Laptop"), Str, RETRIEVAL),
        q("What is the price of order 3?", json!(79.99), Number, RETRIEVAL),
        q("What is the status of order 2?", json!("delivered"), Str, RETRIEVAL),
        q("How many items did Bob order?", json!(2), Number, RETRIEVAL),
        q("Who ordered the Webcam?", json!("David"), Str, RETRIEVAL),
        q("How many orders are there?", json!(5), Number, COUNTING),
        q("How many orders are shipped?", json!(2), Number, COUNTING),
        q("How many orders are delivered?", json!(2), Number, COUNTING),
        q("How many orders are pending?", json!(1), Number, COUNTING),
        q("What is the total value of all orders?", json!(1459.95), Number, AGGREGATION),
        q("What is the average order price?", json!(291.99), Number, AGGREGATION),
        q("What is the most expensive order?", json!(999.99), Number, AGGREGATION),
        q("Which order has the highest price?", json!("1"), Str, AGGREGATION),
        q("How many orders did Alice place?", json!(2), Number, COUNTING),
        q("What is the total value of Alice's orders?", json!(1299.98), Number, AGGREGATION),
    ];
    Dataset::new("orders_simple", "5 simple orders", data, questions)
}

fn ecommerce() -> Dataset {
    let data = json!({
        "customers": [
            {"id": 1, "name": "Alice Johnson", "email": "alice@shop.com", "premium": true, "country": "USA"},
            {"id": 2, "name": "Bob Smith", "email": "bob@shop.com", "premium": false, "country": "UK"},
            {"id": 3, "name": "Carol Davis", "email": "carol@shop.com", "premium": true, "country": "Canada"},
        ],
        "products": [
            {"id": 101, "name": "Laptop Pro", "price": 1299.99, "stock": 50, "category": "Electronics"},
            {"id": 102, "name": "Wireless Mouse", "price": 29.99, "stock": 200, "category": "Electronics"},
            {"id": 103, "name": "USB-C Hub", "price": 49.99, "stock": 150, "category": "Accessories"},
            {"id": 104, "name": "Keyboard", "price": 79.99, "stock": 100, "category": "Electronics"},
        ],
        "orders": [
            {"id": 1001, "customer_id": 1, "product_id": 101, "quantity": 1, "total": 1299.99, "status": "shipped"},
            {"id": 1002, "customer_id": 2, "product_id": 102, "quantity": 2, "total": 59.98, "status": "delivered"},
            {"id": 1003, "customer_id": 1, "product_id": 103, "quantity": 1, "total": 49.99, "status": "pending"},
            {"id": 1004, "customer_id": 3, "product_id": 104, "quantity": 1, "total": 79.99, "status": "shipped"},
            {"id": 1005, "customer_id": 2, "product_id": 101, "quantity": 1, "total": 1299.99, "status": "delivered"},
        ]
    });
    let questions = vec![
        q("What is Alice Johnson's email?", json!("alice@shop.com"), Email, RETRIEVAL),
        q("What is the price of the Laptop Pro?", json!(1299.99), Number, RETRIEVAL),
        q("How much stock does the USB-C Hub have?", json!(150), Number, RETRIEVAL),
        q("Is Bob Smith a premium customer?", json!(false), Boolean, RETRIEVAL),
        q("What category is the Keyboard in?", json!("Electronics"), Str, RETRIEVAL),
        q("How many customers are there?", json!(3), Number, COUNTING),
        q("How many products are there?", json!(4), Number, COUNTING),
        q("How many orders are there?", json!(5), Number, COUNTING),
        q("How many customers are premium?", json!(2), Number, COUNTING),
        q("How many products are in Electronics?", json!(3), Number, COUNTING),
        q("What is the total value of all orders?", json!(2789.94), Number, AGGREGATION),
        q("Which customer placed order 1001?", json!("Alice"), Str, RELATIONSHIP),
        q("What product is in order 1003?", json!("USB-C Hub"), Str, RELATIONSHIP),
        q("How many orders did customer 1 place?", json!(2), Number, RELATIONSHIP),
        q("What is the status of order 1005?", json!("delivered"), Str, RETRIEVAL),
    ];
    Dataset::new("ecommerce", "E-commerce with customers, products, orders", data, questions)
}

fn org_hierarchy() -> Dataset {
    let data = json!({
        "employees": [
            {"id": 1, "name": "CEO Smith", "title": "CEO", "manager_id": null, "salary": 250000},
            {"id": 2, "name": "VP Tech", "title": "VP", "manager_id": 1, "salary": 180000},
            {"id": 3, "name": "VP Sales", "title": "VP", "manager_id": 1, "salary": 170000},
            {"id": 4, "name": "Dir Eng", "title": "Director", "manager_id": 2, "salary": 150000},
            {"id": 5, "name": "Dir Product", "title": "Director", "manager_id": 2, "salary": 145000},
            {"id": 6, "name": "Sales Lead", "title": "Lead", "manager_id": 3, "salary": 120000},
            {"id": 7, "name": "Engineer A", "title": "Senior", "manager_id": 4, "salary": 130000},
            {"id": 8, "name": "Engineer B", "title": "Mid", "manager_id": 4, "salary": 100000},
            {"id": 9, "name": "Engineer C", "title": "Junior", "manager_id": 5, "salary": 80000},
            {"id": 10, "name": "Sales Rep", "title": "Rep", "manager_id": 6, "salary": 70000},
        ]
    });
    let questions = vec![
        q("What is CEO Smith's salary?", json!(250000), Number, RETRIEVAL),
        q("Who is VP Tech's manager?", json!("CEO Smith"), Str, RELATIONSHIP),
        q("What is Dir Eng's title?", json!("Director"), Str, RETRIEVAL),
        q("How many employees report to VP Tech?", json!(2), Number, RELATIONSHIP),
        q("Who has no manager?", json!("CEO Smith"), Str, FILTERING),
        q("How many employees are there?", json!(10), Number, COUNTING),
        q("How many VPs are there?", json!(2), Number, COUNTING),
        q("What is the total salary?", json!(1395000), Number, AGGREGATION),
        q("Who has the lowest salary?", json!("Sales Rep"), Str, AGGREGATION),
        q("What is the average salary?", json!(139500), Number, AGGREGATION),
        q("Who manages Engineer C?", json!("Dir Product"), Str, RELATIONSHIP),
        q("How many Directors are there?", json!(2), Number, COUNTING),
        q("Who reports to Dir Eng?", json!("Engineer A, Engineer B"), List, RELATIONSHIP),
        q("What is Engineer A's salary?", json!(130000), Number, RETRIEVAL),
        q("Who manages Sales Rep?", json!("Sales Lead"), Str, RELATIONSHIP),
    ];
    Dataset::new("org_hierarchy", "Organization with manager relationships", data, questions)
}

fn analytics() -> Dataset {
    let data = json!({
        "events": [
            {"timestamp": "2024-01-15T10:00:00Z", "event": "page_view", "user_id": 1, "page": "/home", "duration": 45},
            {"timestamp": "2024-01-15T10:01:00Z", "event": "click", "user_id": 1, "page": "/products", "duration": 2},
            {"timestamp": "2024-01-15T10:02:00Z", "event": "page_view", "user_id": 2, "page": "/products", "duration": 120},
            {"timestamp": "2024-01-15T10:03:00Z", "event": "search", "user_id": 2, "page": "/search", "duration": 5},
            {"timestamp": "2024-01-15T10:04:00Z", "event": "purchase", "user_id": 1, "page": "/checkout", "duration": 180},
            {"timestamp": "2024-01-15T10:05:00Z", "event": "page_view", "user_id": 3, "page": "/about", "duration": 30},
            {"timestamp": "2024-01-15T10:06:00Z", "event": "signup", "user_id": 4, "page": "/register", "duration": 90},
            {"timestamp": "2024-01-15T10:07:00Z", "event": "page_view", "user_id": 4, "page": "/dashboard", "duration": 60},
        ]
    });
    let questions = vec![
        q("What page was viewed at 10:00?", json!("/home"), Str, RETRIEVAL),
        q("What event happened at 10:04?", json!("purchase"), Str, RETRIEVAL),
        q("How long was the search event?", json!(5), Number, RETRIEVAL),
        q("Which user made the purchase?", json!(1), Number, RETRIEVAL),
        q("What page did user 4 view first?", json!("/dashboard"), Str, RETRIEVAL),
        q("How many events are there?", json!(8), Number, COUNTING),
        q("How many page_view events are there?", json!(4), Number, COUNTING),
        q("How many events did user 1 trigger?", json!(3), Number, COUNTING),
        q("How many unique users are there?", json!(4), Number, COUNTING),
        q("What is the total duration of all events?", json!(532), Number, AGGREGATION),
        q("What is the average event duration?", json!(66.5), Number, AGGREGATION),
        q("Which event had the longest duration?", json!("purchase"), Str, AGGREGATION),
        q("Which event had the shortest duration?", json!("click"), Str, AGGREGATION),
        q(
            "What event types are there?",
            json!("page_view, click, search, purchase, signup"),
            List,
            COUNTING,
        ),
        q("How many events did user 2 trigger?", json!(2), Number, COUNTING),
    ];
    Dataset::new("analytics", "Analytics events", data, questions)
}

fn metrics() -> Dataset {
    let data = json!({
        "metrics": [
            {"date": "2024-01-10", "visitors": 1250, "pageviews": 4500, "signups": 45, "revenue": 12500},
            {"date": "2024-01-11", "visitors": 1180, "pageviews": 4200, "signups": 38, "revenue": 11200},
            {"date": "2024-01-12", "visitors": 1420, "pageviews": 5100, "signups": 52, "revenue": 15800},
            {"date": "2024-01-13", "visitors": 980, "pageviews": 3200, "signups": 25, "revenue": 8500},
            {"date": "2024-01-14", "visitors": 890, "pageviews": 2900, "signups": 22, "revenue": 7200},
        ]
    });
    let questions = vec![
        q("How many visitors on 2024-01-12?", json!(1420), Number, RETRIEVAL),
        q("What was the revenue on 2024-01-10?", json!(12500), Number, RETRIEVAL),
        q("How many signups on 2024-01-14?", json!(22), Number, RETRIEVAL),
        q("How many pageviews on 2024-01-11?", json!(4200), Number, RETRIEVAL),
        q("What date had 980 visitors?", json!("2024-01-13"), Date, FILTERING),
        q("What is the total revenue?", json!(55200), Number, AGGREGATION),
        q("What is the total number of signups?", json!(182), Number, AGGREGATION),
        q("What is the total number of visitors?", json!(5720), Number, AGGREGATION),
        q("Which day had the most visitors?", json!("2024-01-12"), Date, AGGREGATION),
        q("Which day had the least visitors?", json!("2024-01-14"), Date, AGGREGATION),
        q("What is the average daily revenue?", json!(11040), Number, AGGREGATION),
        q("Which day had the most signups?", json!("2024-01-12"), Date, AGGREGATION),
        q("What is the total number of pageviews?", json!(19900), Number, AGGREGATION),
        q("Which day had the highest revenue?", json!("2024-01-12"), Date, AGGREGATION),
        q("What was the lowest daily revenue?", json!(7200), Number, AGGREGATION),
    ];
    Dataset::new("metrics", "Daily metrics", data, questions)
}

fn social_graph() -> Dataset {
    let data = json!({
        "nodes": [
            {"id": 1, "name": "Alice", "follower_count": 1500, "verified": true},
            {"id": 2, "name": "Bob", "follower_count": 800, "verified": false},
            {"id": 3, "name": "Carol", "follower_count": 2200, "verified": true},
            {"id": 4, "name": "David", "follower_count": 450, "verified": false},
            {"id": 5, "name": "Eve", "follower_count": 3100, "verified": true},
        ],
        "edges": [
            {"source": 1, "target": 2, "relation": "follows"},
            {"source": 1, "target": 3, "relation": "follows"},
            {"source": 2, "target": 3, "relation": "follows"},
            {"source": 3, "target": 5, "relation": "follows"},
            {"source": 4, "target": 1, "relation": "follows"},
            {"source": 5, "target": 1, "relation": "follows"},
        ]
    });
    let questions = vec![
        q("What is Eve's follower_count?", json!(3100), Number, RETRIEVAL),
        q("Is Carol verified?", json!(true), Boolean, RETRIEVAL),
        q("What is Bob's follower_count?", json!(800), Number, RETRIEVAL),
        q("Is David verified?", json!(false), Boolean, RETRIEVAL),
        q("What is Alice's follower_count?", json!(1500), Number, RETRIEVAL),
        q("How many nodes are there?", json!(5), Number, COUNTING),
        q("How many edges are there?", json!(6), Number, COUNTING),
        q("How many verified users are there?", json!(3), Number, COUNTING),
        q("Who has the highest follower_count?", json!("Eve"), Str, AGGREGATION),
        q("Who has the lowest follower_count?", json!("David"), Str, AGGREGATION),
        q("What is the total follower_count?", json!(8050), Number, AGGREGATION),
        q("Who does Alice follow?", json!("Bob, Carol"), List, RELATIONSHIP),
        q("Who follows Alice?", json!("David, Eve"), List, RELATIONSHIP),
        q("Does Carol follow Eve?", json!(true), Boolean, RELATIONSHIP),
        q("How many users does Alice follow?", json!(2), Number, RELATIONSHIP),
    ];
    Dataset::new("social_graph", "Social network with follows", data, questions)
}

fn company_graph() -> Dataset {
    let data = json!({
        "nodes": [
            {"id": 1, "type": "company", "name": "TechCorp", "employees": 5000, "industry": "Technology"},
            {"id": 2, "type": "company", "name": "DataInc", "employees": 1200, "industry": "Data"},
            {"id": 3, "type": "company", "name": "CloudSys", "employees": 3500, "industry": "Cloud"},
            {"id": 4, "type": "person", "name": "John CEO", "company": "TechCorp", "role": "CEO"},
            {"id": 5, "type": "person", "name": "Jane CTO", "company": "DataInc", "role": "CTO"},
        ],
        "edges": [
            {"source": 1, "target": 2, "relation": "partner", "value": 5000000},
            {"source": 1, "target": 3, "relation": "customer", "value": 2000000},
            {"source": 2, "target": 3, "relation": "vendor", "value": 1500000},
            {"source": 4, "target": 5, "relation": "knows", "value": null},
        ]
    });
    let questions = vec![
        q("How many employees does TechCorp have?", json!(5000), Number, RETRIEVAL),
        q("What industry is DataInc in?", json!("Data"), Str, RETRIEVAL),
        q("What is John CEO's role?", json!("CEO"), Str, RETRIEVAL),
        q("What company is Jane CTO at?", json!("DataInc"), Str, RETRIEVAL),
        q("How many employees does CloudSys have?", json!(3500), Number, RETRIEVAL),
        q("How many company nodes are there?", json!(3), Number, COUNTING),
        q("How many person nodes are there?", json!(2), Number, COUNTING),
        q("How many edges are there?", json!(4), Number, COUNTING),
        q(
            "What is the partnership value between TechCorp and DataInc?",
            json!(5000000),
            Number,
            RELATIONSHIP,
        ),
        q("What is TechCorp's relation to CloudSys?", json!("customer"), Str, RELATIONSHIP),
        q(
            "What is the total value of all business relationships?",
            json!(8500000),
            Number,
            AGGREGATION,
        ),
        q("Which company has the most employees?", json!("TechCorp"), Str, AGGREGATION),
        q("What is DataInc's relation to CloudSys?", json!("vendor"), Str, RELATIONSHIP),
        q(
            "What is the relation between John CEO and Jane CTO?",
            json!("knows"),
            Str,
            RELATIONSHIP,
        ),
        q("How many edges have a value?", json!(3), Number, COUNTING),
    ];
    Dataset::new("company_graph", "Company relationships", data, questions)
}

fn config() -> Dataset {
    let data = json!({
        "settings": [
            {"key": "debug", "value": "true", "type": "boolean", "env": "development"},
            {"key": "max_connections", "value": "100", "type": "integer", "env": "all"},
            {"key": "timeout", "value": "30", "type": "integer", "env": "production"},
            {"key": "api_url", "value": "https://api.example.com", "type": "string", "env": "production"},
            {"key": "cache_ttl", "value": "3600", "type": "integer", "env": "production"},
            {"key": "log_level", "value": "info", "type": "string", "env": "all"},
        ]
    });
    let questions = vec![
        q("What is the value of debug?", json!("true"), Str, RETRIEVAL),
        q("What is the max_connections value?", json!(100), Number, RETRIEVAL),
        q("What type is api_url?", json!("string"), Str, RETRIEVAL),
        q("What is the timeout value?", json!(30), Number, RETRIEVAL),
        q("What environment is cache_ttl for?", json!("production"), Str, RETRIEVAL),
        q("How many settings are there?", json!(6), Number, COUNTING),
        q("How many settings are for production?", json!(3), Number, COUNTING),
        q("How many settings are for all environments?", json!(2), Number, COUNTING),
        q("How many integer type settings are there?", json!(3), Number, COUNTING),
        q("What is the api_url value?", json!("https://api.example.com"), Str, RETRIEVAL),
        q("What is the log_level value?", json!("info"), Str, RETRIEVAL),
        q("What type is max_connections?", json!("integer"), Str, RETRIEVAL),
        q("What environment is debug for?", json!("development"), Str, RETRIEVAL),
        q("How many boolean type settings are there?", json!(1), Number, COUNTING),
        q("How many string type settings are there?", json!(2), Number, COUNTING),
    ];
    Dataset::new("config", "Configuration settings", data, questions)
}

fn logs() -> Dataset {
    let data = json!({
        "logs": [
            {"timestamp": "2024-01-15T10:00:00Z", "level": "INFO", "service": "api", "message": "Server started"},
            {"timestamp": "2024-01-15T10:01:00Z", "level": "INFO", "service": "db", "message": "Connected"},
            {"timestamp": "2024-01-15T10:02:00Z", "level": "WARN", "service": "cache", "message": "High memory"},
            {"timestamp": "2024-01-15T10:03:00Z", "level": "ERROR", "service": "auth", "message": "Login failed"},
            {"timestamp": "2024-01-15T10:04:00Z", "level": "INFO", "service": "api", "message": "Request OK"},
            {"timestamp": "2024-01-15T10:05:00Z", "level": "ERROR", "service": "db", "message": "Query timeout"},
            {"timestamp": "2024-01-15T10:06:00Z", "level": "DEBUG", "service": "api", "message": "Debug info"},
            {"timestamp": "2024-01-15T10:07:00Z", "level": "INFO", "service": "api", "message": "Health OK"},
        ]
    });
    let questions = vec![
        q("What service logged 'Server started'?", json!("api"), Str, RETRIEVAL),
        q("What level is the cache log?", json!("WARN"), Str, RETRIEVAL),
        q("What service had the ERROR 'Login failed'?", json!("auth"), Str, RETRIEVAL),
        q("What message did db log at ERROR level?", json!("Query timeout"), Str, RETRIEVAL),
        q("What level is the DEBUG log?", json!("DEBUG"), Str, RETRIEVAL),
        q("How many logs are there?", json!(8), Number, COUNTING),
        q("How many INFO logs are there?", json!(4), Number, COUNTING),
        q("How many ERROR logs are there?", json!(2), Number, COUNTING),
        q("How many logs from the api service?", json!(4), Number, COUNTING),
        q("How many unique services are logged?", json!(4), Number, COUNTING),
        q("Which service has the most logs?", json!("api"), Str, AGGREGATION),
        q("What was the first log message?", json!("Server started"), Str, RETRIEVAL),
        q("What was the last log message?", json!("Health OK"), Str, RETRIEVAL),
        q("How many WARN logs are there?", json!(1), Number, COUNTING),
        q("How many logs from db service?", json!(2), Number, COUNTING),
    ];
    Dataset::new("logs", "System log entries", data, questions)
}

fn transactions() -> Dataset {
    let data = json!({
        "transactions": [
            {"id": 1, "date": "2024-01-10", "type": "credit", "amount": 5000, "category": "salary", "account": "ACC001"},
            {"id": 2, "date": "2024-01-11", "type": "debit", "amount": 150, "category": "utilities", "account": "ACC001"},
            {"id": 3, "date": "2024-01-12", "type": "debit", "amount": 45, "category": "food", "account": "ACC001"},
            {"id": 4, "date": "2024-01-13", "type": "debit", "amount": 1200, "category": "rent", "account": "ACC001"},
            {"id": 5, "date": "2024-01-14", "type": "credit", "amount": 250, "category": "refund", "account": "ACC001"},
        ]
    });
    let questions = vec![
        q("What is the amount of transaction 1?", json!(5000), Number, RETRIEVAL),
        q("What category is transaction 4?", json!("rent"), Str, RETRIEVAL),
        q("What type is transaction 5?", json!("credit"), Str, RETRIEVAL),
        q("What is the amount of the food transaction?", json!(45), Number, RETRIEVAL),
        q("What date is transaction 3?", json!("2024-01-12"), Date, RETRIEVAL),
        q("How many transactions are there?", json!(5), Number, COUNTING),
        q("How many credit transactions are there?", json!(2), Number, COUNTING),
        q("How many debit transactions are there?", json!(3), Number, COUNTING),
        q("What is the total credit amount?", json!(5250), Number, AGGREGATION),
        q("What is the total debit amount?", json!(1395), Number, AGGREGATION),
        q("What is the largest transaction?", json!(5000), Number, AGGREGATION),
        q("What is the smallest transaction?", json!(45), Number, AGGREGATION),
        q("What is the net balance change?", json!(3855), Number, AGGREGATION),
        q("Which transaction is the largest?", json!("1"), Str, AGGREGATION),
        q("What is the average transaction amount?", json!(1329), Number, AGGREGATION),
    ];
    Dataset::new("transactions", "Financial transactions", data, questions)
}

fn stocks() -> Dataset {
    let data = json!({
        "prices": [
            {"date": "2024-01-08", "symbol": "TECH", "open": 150, "close": 152, "high": 153, "low": 149, "volume": 1250000},
            {"date": "2024-01-09", "symbol": "TECH", "open": 152, "close": 155, "high": 156, "low": 151, "volume": 1480000},
            {"date": "2024-01-10", "symbol": "TECH", "open": 155, "close": 153, "high": 157, "low": 152, "volume": 1320000},
            {"date": "2024-01-08", "symbol": "DATA", "open": 80, "close": 82, "high": 83, "low": 79, "volume": 890000},
            {"date": "2024-01-09", "symbol": "DATA", "open": 82, "close": 84, "high": 85, "low": 80, "volume": 1100000},
            {"date": "2024-01-10", "symbol": "DATA", "open": 84, "close": 83, "high": 86, "low": 81, "volume": 950000},
        ]
    });
    let questions = vec![
        q("What was TECH's close on 2024-01-09?", json!(155), Number, RETRIEVAL),
        q("What was DATA's volume on 2024-01-08?", json!(890000), Number, RETRIEVAL),
        q("What was TECH's high on 2024-01-10?", json!(157), Number, RETRIEVAL),
        q("What was DATA's open on 2024-01-09?", json!(82), Number, RETRIEVAL),
        q("What was TECH's low on 2024-01-08?", json!(149), Number, RETRIEVAL),
        q("How many price records are there?", json!(6), Number, COUNTING),
        q("How many TECH records are there?", json!(3), Number, COUNTING),
        q("How many DATA records are there?", json!(3), Number, COUNTING),
        q("What is TECH's average close?", json!(153.33), Number, AGGREGATION),
        q("What is DATA's average close?", json!(83), Number, AGGREGATION),
        q("What is the total TECH volume?", json!(4050000), Number, AGGREGATION),
        q("What is the total DATA volume?", json!(2940000), Number, AGGREGATION),
        q("Which stock had the highest close?", json!("TECH"), Str, AGGREGATION),
        q("What was TECH's highest high?", json!(157), Number, AGGREGATION),
        q("What was DATA's lowest low?", json!(79), Number, AGGREGATION),
    ];
    Dataset::new("stocks", "Stock price history", data, questions)
}

fn inventory() -> Dataset {
    let data = json!({
        "products": [
            {"sku": "SKU001", "name": "Widget A", "quantity": 150, "location": "A1", "price": 10},
            {"sku": "SKU002", "name": "Widget B", "quantity": 75, "location": "A2", "price": 15},
            {"sku": "SKU003", "name": "Gadget X", "quantity": 200, "location": "B1", "price": 25},
            {"sku": "SKU004", "name": "Gadget Y", "quantity": 50, "location": "B2", "price": 35},
            {"sku": "SKU005", "name": "Part Z", "quantity": 500, "location": "C1", "price": 5},
        ]
    });
    let questions = vec![
        q("What is Widget A's quantity?", json!(150), Number, RETRIEVAL),
        q("Where is Gadget Y located?", json!("B2"), Str, RETRIEVAL),
        q("What is the price of Part Z?", json!(5), Number, RETRIEVAL),
        q("What is the SKU for Gadget X?", json!("SKU003"), Str, RETRIEVAL),
        q("What is Widget B's location?", json!("A2"), Str, RETRIEVAL),
        q("How many products are there?", json!(5), Number, COUNTING),
        q("How many products are in location A?", json!(2), Number, COUNTING),
        q("How many products are in location B?", json!(2), Number, COUNTING),
        q("What is the total quantity?", json!(975), Number, AGGREGATION),
        q("What is the total inventory value?", json!(11625), Number, AGGREGATION),
        q(
            "What is the name of the product with the most stock?",
            json!("Part Z"),
            Str,
            AGGREGATION,
        ),
        q(
            "What is the name of the product with the least stock?",
            json!("Gadget Y"),
            Str,
            AGGREGATION,
        ),
        q("What is the average price?", json!(18), Number, AGGREGATION),
        q("What is the most expensive item?", json!("Gadget Y"), Str, AGGREGATION),
        q("What is the name of the cheapest product?", json!("Part Z"), Str, AGGREGATION),
    ];
    Dataset::new("inventory", "Warehouse inventory", data, questions)
}

fn products() -> Dataset {
    let data = json!({
        "products": [
            {"id": 1, "name": "Laptop Pro", "brand": "TechMax", "price": 1299, "rating": 4.5, "reviews": 245, "in_stock": true},
            {"id": 2, "name": "Monitor 27", "brand": "ViewPro", "price": 549, "rating": 4.8, "reviews": 189, "in_stock": true},
            {"id": 3, "name": "Keyboard", "brand": "TypeWell", "price": 129, "rating": 4.2, "reviews": 567, "in_stock": true},
            {"id": 4, "name": "Mouse", "brand": "ClickMax", "price": 79, "rating": 4.6, "reviews": 892, "in_stock": false},
            {"id": 5, "name": "USB Hub", "brand": "ConnectAll", "price": 45, "rating": 4.0, "reviews": 234, "in_stock": true},
        ]
    });
    let questions = vec![
        q("What is the Laptop Pro's price?", json!(1299), Number, RETRIEVAL),
        q("What brand is the Monitor 27?", json!("ViewPro"), Str, RETRIEVAL),
        q("What is the Keyboard's rating?", json!(4.2), Number, RETRIEVAL),
        q("How many reviews does Mouse have?", json!(892), Number, RETRIEVAL),
        q("Is USB Hub in stock?", json!(true), Boolean, RETRIEVAL),
        q("How many products are there?", json!(5), Number, COUNTING),
        q("How many products are in stock?", json!(4), Number, COUNTING),
        q("How many products are out of stock?", json!(1), Number, COUNTING),
        q("Which product has the highest rating?", json!("Monitor 27"), Str, AGGREGATION),
        q("Which product has the most reviews?", json!("Mouse"), Str, AGGREGATION),
        q("What is the average rating?", json!(4.42), Number, AGGREGATION),
        q("What is the total number of reviews?", json!(2127), Number, AGGREGATION),
        q("Which product is the most expensive?", json!("Laptop Pro"), Str, AGGREGATION),
        q("Which product is the cheapest?", json!("USB Hub"), Str, AGGREGATION),
        q("What is the average price?", json!(420.2), Number, AGGREGATION),
    ];
    Dataset::new("products", "Product catalog", data, questions)
}

fn edge_nulls() -> Dataset {
    let data = json!({
        "records": [
            {"id": 1, "name": "Complete", "value": 100, "optional": "present"},
            {"id": 2, "name": "Missing Value", "value": null, "optional": "present"},
            {"id": 3, "name": "Missing Optional", "value": 50, "optional": null},
            {"id": 4, "name": "Both Missing", "value": null, "optional": null},
            {"id": 5, "name": "All Present", "value": 75, "optional": "here"},
        ]
    });
    let questions = vec![
        q("What is record 1's value?", json!(100), Number, RETRIEVAL),
        q("What is record 2's value?", Value::Null, Null, EDGE),
        q("What is record 3's optional?", Value::Null, Null, EDGE),
        q("Is record 4's value null?", json!(true), Boolean, EDGE),
        q("Is record 4's optional null?", json!(true), Boolean, EDGE),
        q("How many records have a null value?", json!(2), Number, COUNTING),
        q("How many records have a null optional?", json!(2), Number, COUNTING),
        q("How many records have both fields present?", json!(3), Number, COUNTING),
        q("What is record 5's value?", json!(75), Number, RETRIEVAL),
        q("What is record 5's optional?", json!("here"), Str, RETRIEVAL),
        q("Which record has 'present' in optional?", json!("1, 2"), List, FILTERING),
        q("What is the sum of non-null values?", json!(225), Number, AGGREGATION),
        q("How many records have no nulls?", json!(3), Number, COUNTING),
        q("What is record 3's value?", json!(50), Number, RETRIEVAL),
        q("What is record 1's name?", json!("Complete"), Str, RETRIEVAL),
    ];
    Dataset::new("edge_nulls", "Dataset with null values", data, questions)
}

fn edge_numbers() -> Dataset {
    let data = json!({
        "numbers": [
            {"id": 1, "integer": 0, "decimal": 0.0, "negative": -100, "large": 1000000},
            {"id": 2, "integer": 1, "decimal": 0.001, "negative": -0.5, "large": 999999999},
            {"id": 3, "integer": 100, "decimal": 99.99, "negative": -999, "large": 123456789},
            {"id": 4, "integer": -50, "decimal": 3.14159, "negative": -0.01, "large": 2147483647i64},
        ]
    });
    let questions = vec![
        q("What is record 1's integer?", json!(0), Number, EDGE),
        q("What is record 2's decimal?", json!(0.001), Number, EDGE),
        q("What is record 3's negative?", json!(-999), Number, EDGE),
        q("What is record 4's large value?", json!(2147483647i64), Number, EDGE),
        q("What is record 4's integer?", json!(-50), Number, EDGE),
        q("How many records are there?", json!(4), Number, COUNTING),
        q("What is the sum of integers?", json!(51), Number, AGGREGATION),
        q("What is the smallest negative?", json!(-999), Number, AGGREGATION),
        q("What is the largest 'large' value?", json!(2147483647i64), Number, AGGREGATION),
        q("What is record 4's decimal?", json!(3.14159), Number, EDGE),
        q("What is record 1's negative?", json!(-100), Number, EDGE),
        q("What is record 2's large?", json!(999999999), Number, EDGE),
        q("What is record 3's integer?", json!(100), Number, RETRIEVAL),
        q("What is the sum of all large values?", json!(3270940435i64), Number, AGGREGATION),
        q("Which record has integer=0?", json!("1"), Str, FILTERING),
    ];
    Dataset::new("edge_numbers", "Numeric edge cases", data, questions)
}

fn edge_strings() -> Dataset {
    let data = json!({
        "products": [
            {"id": 1, "name": "Normal", "value": "Regular text"},
            {"id": 2, "name": "With Comma", "value": "Has, comma"},
            {"id": 3, "name": "With Quote", "value": "Has \"quotes\""},
            {"id": 4, "name": "With Colon", "value": "Key: Value"},
            {"id": 5, "name": "With Special", "value": "Chars @#$%"},
        ]
    });
    let questions = vec![
        q("What is item 1's value?", json!("Regular text"), Str, RETRIEVAL),
        q("What is item 2's name?", json!("With Comma"), Str, EDGE),
        q("What is item 3's value?", json!("Has \"quotes\""), Str, EDGE),
        q("What is item 4's value?", json!("Key: Value"), Str, EDGE),
        q("What is item 5's value?", json!("Chars @#$%"), Str, EDGE),
        q("How many products are there?", json!(5), Number, COUNTING),
        q("Which item has 'Normal' name?", json!("1"), Str, FILTERING),
        q("Which item has special chars?", json!("5"), Str, FILTERING),
        q("What is item 1's name?", json!("Normal"), Str, RETRIEVAL),
        q("What is item 3's name?", json!("With Quote"), Str, RETRIEVAL),
        q("Which items have quotes in value?", json!("3"), Str, FILTERING),
        q("What is item 4's name?", json!("With Colon"), Str, RETRIEVAL),
        q("What is item 2's value?", json!("Has, comma"), Str, EDGE),
        q("Which item has 'Key' in value?", json!("4"), Str, FILTERING),
        q("What is item 5's name?", json!("With Special"), Str, RETRIEVAL),
    ];
    Dataset::new("edge_strings", "Special character handling", data, questions)
}

fn comprehensive() -> Dataset {
    let data = json!({
        "users": [
            {"id": 1, "name": "Alice", "email": "alice@test.com", "active": true, "score": 95.5},
            {"id": 2, "name": "Bob", "email": "bob@test.com", "active": false, "score": 82.0},
            {"id": 3, "name": "Carol", "email": "carol@test.com", "active": true, "score": 88.5},
        ],
        "tasks": [
            {"id": 101, "user_id": 1, "title": "Task A", "status": "done", "priority": 1},
            {"id": 102, "user_id": 1, "title": "Task B", "status": "pending", "priority": 2},
            {"id": 103, "user_id": 2, "title": "Task C", "status": "done", "priority": 1},
            {"id": 104, "user_id": 3, "title": "Task D", "status": "in_progress", "priority": 3},
        ]
    });
    let questions = vec![
        q("What is Alice's email?", json!("alice@test.com"), Email, RETRIEVAL),
        q("What is Bob's score?", json!(82.0), Number, RETRIEVAL),
        q("Is Carol active?", json!(true), Boolean, RETRIEVAL),
        q("What is Task B's status?", json!("pending"), Str, RETRIEVAL),
        q("What is Task D's priority?", json!(3), Number, RETRIEVAL),
        q("How many users are there?", json!(3), Number, COUNTING),
        q("How many tasks are there?", json!(4), Number, COUNTING),
        q("How many tasks are done?", json!(2), Number, COUNTING),
        q("How many active users are there?", json!(2), Number, COUNTING),
        q("What is the average score?", json!(88.67), Number, AGGREGATION),
        q("Who has the highest score?", json!("Alice"), Str, AGGREGATION),
        q("How many tasks does user 1 have?", json!(2), Number, RELATIONSHIP),
        q("Which user has Task C?", json!("Bob"), Str, RELATIONSHIP),
        q("What is the total score of all users?", json!(266), Number, AGGREGATION),
        q("How many priority 1 tasks are there?", json!(2), Number, COUNTING),
    ];
    Dataset::new("comprehensive", "Comprehensive mixed dataset", data, questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_counts() {
        let datasets = create_datasets();
        assert_eq!(datasets.len(), 20);
        let total: usize = datasets.iter().map(|d| d.question_count()).sum();
        assert_eq!(total, 300);
        for ds in &datasets {
            assert_eq!(ds.question_count(), 15, "dataset {}", ds.name);
        }
    }

    #[test]
    fn test_dataset_names_unique() {
        let datasets = create_datasets();
        let mut names: Vec<&str> = datasets.iter().map(|d| d.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn test_generated_users_25_invariants() {
        let ds = users_25();
        let users = ds.data["users"].as_array().unwrap();
        assert_eq!(users.len(), 25);
        let active = users
            .iter()
            .filter(|u| u["active"].as_bool().unwrap())
            .count();
        assert_eq!(active, 17);
        let admins = users
            .iter()
            .filter(|u| u["role"] == json!("admin"))
            .count();
        assert_eq!(admins, 6);
        // Salary scales linearly with id
        assert_eq!(users[24]["salary"], json!(100000));
        assert_eq!(users[0]["salary"], json!(52000));
    }

    #[test]
    fn test_generated_users_100_invariants() {
        let ds = users_100();
        let users = ds.data["users"].as_array().unwrap();
        assert_eq!(users.len(), 100);
        let active = users
            .iter()
            .filter(|u| u["active"].as_bool().unwrap())
            .count();
        assert_eq!(active, 50);
        let engineering = users
            .iter()
            .filter(|u| u["department"] == json!("Engineering"))
            .count();
        assert_eq!(engineering, 12);
        assert_eq!(users[0]["role"], json!("user"));
        assert_eq!(users[32]["role"], json!("admin"));
        assert_eq!(users[98]["department"], json!("Legal"));
    }

    #[test]
    fn test_all_expected_numbers_parse() {
        // Number questions must carry parseable expected values; a failure
        // here is a fixture-authoring defect.
        for ds in create_datasets() {
            for question in &ds.questions {
                if question.answer_type == AnswerType::Number {
                    assert!(
                        question.expected.is_number(),
                        "non-numeric expected in {}: {}",
                        ds.name,
                        question.text
                    );
                }
            }
        }
    }

    #[test]
    fn test_categories_cover_all_six() {
        let mut seen = std::collections::BTreeSet::new();
        for ds in create_datasets() {
            for question in &ds.questions {
                seen.insert(question.category.clone());
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_every_dataset_has_a_description() {
        for ds in create_datasets() {
            assert!(!ds.description.is_empty(), "dataset {}", ds.name);
        }
    }
}

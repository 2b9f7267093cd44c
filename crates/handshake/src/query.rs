//! The static query submitted to the webhook.
//!
//! For every department, selects the employee with the highest total salary
//! (ignoring payments made on the first day of a month) together with the
//! department name, that salary, the employee's full name, and age.
//!
//! The text is opaque payload data. Nothing in this workspace parses or
//! executes it, and it is sent byte-for-byte as written here.

/// The query posted as `finalQuery` in the submission call.
pub const FINAL_QUERY: &str = concat!(
    "WITH filtered_payments AS (\n",
    "    SELECT \n",
    "        p.EMP_ID,\n",
    "        SUM(p.AMOUNT) AS total_salary\n",
    "    FROM PAYMENTS p\n",
    "    WHERE EXTRACT(DAY FROM p.PAYMENT_TIME) <> 1\n",
    "    GROUP BY p.EMP_ID\n",
    "),\n",
    "ranked AS (\n",
    "    SELECT \n",
    "        d.DEPARTMENT_NAME,\n",
    "        fp.total_salary AS SALARY,\n",
    "        CONCAT(e.FIRST_NAME, ' ', e.LAST_NAME) AS EMPLOYEE_NAME,\n",
    "        FLOOR(DATEDIFF(CURDATE(), e.DOB) / 365) AS AGE,\n",
    "        ROW_NUMBER() OVER (\n",
    "            PARTITION BY d.DEPARTMENT_ID \n",
    "            ORDER BY fp.total_salary DESC\n",
    "        ) AS rn\n",
    "    FROM filtered_payments fp\n",
    "    JOIN EMPLOYEE e ON fp.EMP_ID = e.EMP_ID\n",
    "    JOIN DEPARTMENT d ON e.DEPARTMENT = d.DEPARTMENT_ID\n",
    ")\n",
    "SELECT \n",
    "    DEPARTMENT_NAME,\n",
    "    SALARY,\n",
    "    EMPLOYEE_NAME,\n",
    "    AGE\n",
    "FROM ranked\n",
    "WHERE rn = 1;",
);
